use crate::profile::Profile;

// (id, given name, family name, age, institution, program, avatar, color)
const SEED: [(&str, &str, &str, &str, &str, &str, &str, &str); 5] = [
    (
        "1",
        "Ana",
        "Silva",
        "22",
        "Universidade Federal",
        "Ciência da Computação",
        "👩\u{200d}💻",
        "#FF6B6B",
    ),
    (
        "2",
        "Carlos",
        "Santos",
        "25",
        "Instituto Tecnológico",
        "Engenharia de Software",
        "👨\u{200d}💻",
        "#4ECDC4",
    ),
    (
        "3",
        "Maria",
        "Oliveira",
        "20",
        "Faculdade de Tecnologia",
        "Sistemas de Informação",
        "👩\u{200d}🎓",
        "#45B7D1",
    ),
    (
        "4",
        "João",
        "Costa",
        "28",
        "Universidade Estadual",
        "Análise e Desenvolvimento",
        "👨\u{200d}🎓",
        "#96CEB4",
    ),
    (
        "5",
        "Lucas",
        "Ferreira",
        "24",
        "Centro Universitário",
        "Ciência de Dados",
        "👨\u{200d}🔬",
        "#FFEAA7",
    ),
];

/// Sample collection written when no collection has been persisted yet
pub fn seed_profiles() -> Vec<Profile> {
    SEED.iter()
        .map(
            |&(id, given, family, age, institution, program, avatar, color)| {
                Profile {
                    id: id.to_owned(),
                    given_name: given.to_owned(),
                    family_name: family.to_owned(),
                    age: age.to_owned(),
                    institution: institution.to_owned(),
                    program: program.to_owned(),
                    avatar: avatar.to_owned(),
                    color: color.to_owned(),
                }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_is_ordered_with_distinct_ids_and_colors() {
        let seed = seed_profiles();
        let ids: Vec<_> = seed.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);

        let colors: HashSet<_> = seed.iter().map(|p| &p.color).collect();
        assert_eq!(colors.len(), 5);
    }

    #[test]
    fn seed_names_and_ages() {
        let names: Vec<_> = seed_profiles()
            .iter()
            .map(|p| (p.full_name(), p.age.clone()))
            .collect();
        assert_eq!(
            names,
            [
                ("Ana Silva".to_owned(), "22".to_owned()),
                ("Carlos Santos".to_owned(), "25".to_owned()),
                ("Maria Oliveira".to_owned(), "20".to_owned()),
                ("João Costa".to_owned(), "28".to_owned()),
                ("Lucas Ferreira".to_owned(), "24".to_owned()),
            ]
        );
    }
}
