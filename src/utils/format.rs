//! Plain-text rendering of cat records for the terminal.

use crate::models::cat::Cat;

pub fn render_cat(cat: &Cat) -> String {
    let id = cat.id
        .map(|oid| oid.to_hex())
        .unwrap_or_else(|| "(unsaved)".to_string());

    format!(
        "ID: {}\nName: {}\nAge: {}\nFeatures: {}",
        id,
        cat.name,
        cat.age,
        cat.features.join(", ")
    )
}

pub fn render_cat_list(cats: &[Cat]) -> String {
    if cats.is_empty() {
        return "No cats in the database".to_string();
    }

    let mut out = format!("Found {} cat(s):\n", cats.len());
    for (i, cat) in cats.iter().enumerate() {
        out.push_str(
            &format!("{}. {} (age {}): {}\n", i + 1, cat.name, cat.age, cat.features.join(", "))
        );
    }
    out.pop();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_features_in_stored_order() {
        let cat = Cat::new("barsik", 3, vec![
            "ходить в капці".to_string(),
            "рудий".to_string()
        ]);

        let text = render_cat(&cat);
        assert!(text.contains("Features: ходить в капці, рудий"));
        assert!(text.contains("ID: (unsaved)"));
    }

    #[test]
    fn empty_list_says_so() {
        assert_eq!(render_cat_list(&[]), "No cats in the database");
    }

    #[test]
    fn list_is_numbered_from_one() {
        let cats = vec![
            Cat::new("mura", 2, vec!["чорний".to_string()]),
            Cat::new("shadow", 4, vec!["тихий".to_string()])
        ];

        let text = render_cat_list(&cats);
        assert!(text.starts_with("Found 2 cat(s):"));
        assert!(text.contains("1. mura (age 2): чорний"));
        assert!(text.contains("2. shadow (age 4): тихий"));
    }
}
