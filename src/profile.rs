use serde::{Deserialize, Serialize};

use crate::{DEFAULT_AVATAR, DEFAULT_COLOR};

/// A single editable profile record.
///
/// Every field is text, age included, and the serialized form keeps
/// the persisted key names of the collection blob. Records carrying
/// other keys are rejected so a rewrite never silently drops data.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub id: String,
    #[serde(rename = "nome")]
    pub given_name: String,
    #[serde(rename = "sobrenome")]
    pub family_name: String,
    #[serde(rename = "idade")]
    pub age: String,
    #[serde(rename = "instituicao")]
    pub institution: String,
    #[serde(rename = "curso")]
    pub program: String,
    pub avatar: String,
    #[serde(rename = "cor")]
    pub color: String,
}

/// Fields a user may change through the edit form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileField {
    GivenName,
    FamilyName,
    Age,
    Institution,
    Program,
}

const NO_PROGRAM: &str = "No program set";
const NO_INSTITUTION: &str = "No institution";
const NOT_PROVIDED: &str = "Not provided";

impl Default for Profile {
    /// Empty draft, used by the edit form before anything is loaded
    fn default() -> Self {
        Self {
            id: String::new(),
            given_name: String::new(),
            family_name: String::new(),
            age: String::new(),
            institution: String::new(),
            program: String::new(),
            avatar: DEFAULT_AVATAR.to_owned(),
            color: DEFAULT_COLOR.to_owned(),
        }
    }
}

impl Profile {
    /// Placeholder record created by the list's "add" action
    pub fn blank(id: String) -> Self {
        Self {
            id,
            given_name: "Novo".to_owned(),
            family_name: "Usuário".to_owned(),
            ..Self::default()
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }

    /// First letter of the given and family names, uppercased
    pub fn initials(&self) -> String {
        self.given_name
            .chars()
            .take(1)
            .chain(self.family_name.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn program_label(&self) -> &str {
        or_placeholder(&self.program, NO_PROGRAM)
    }

    pub fn institution_label(&self) -> &str {
        or_placeholder(&self.institution, NO_INSTITUTION)
    }

    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::GivenName => &self.given_name,
            ProfileField::FamilyName => &self.family_name,
            ProfileField::Age => &self.age,
            ProfileField::Institution => &self.institution,
            ProfileField::Program => &self.program,
        }
    }

    /// Value of `field` for read-only display
    pub fn display_field(&self, field: ProfileField) -> &str {
        or_placeholder(self.field(field), NOT_PROVIDED)
    }

    pub fn set_field(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::GivenName => &mut self.given_name,
            ProfileField::FamilyName => &mut self.family_name,
            ProfileField::Age => &mut self.age,
            ProfileField::Institution => &mut self.institution,
            ProfileField::Program => &mut self.program,
        };
        *slot = value;
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}
