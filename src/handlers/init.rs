//! One-shot database bootstrap: create the scoped application user and load
//! the sample cats. Deliberately not idempotent — no existence checks, so a
//! re-run fails on the duplicate user (or duplicates the documents if the
//! user step is skipped).

use mongodb::Database;
use mongodb::bson::doc;
use tracing::info;

use crate::config;
use crate::error::AppError;
use crate::models::cat::Cat;

/// The fixed sample data, in source order.
pub fn seed_cats() -> Vec<Cat> {
    vec![
        Cat::new("barsik", 3, vec![
            "ходить в капці".to_string(),
            "дає себе гладити".to_string(),
            "рудий".to_string()
        ]),
        Cat::new("whiskers", 5, vec![
            "полює на мишей".to_string(),
            "любить рибу".to_string(),
            "сірий".to_string()
        ]),
        Cat::new("mura", 2, vec![
            "грається з клубком".to_string(),
            "спить весь день".to_string(),
            "чорний".to_string()
        ]),
        Cat::new("snowball", 1, vec![
            "дуже активний".to_string(),
            "білий".to_string(),
            "голубі очі".to_string()
        ]),
        Cat::new("shadow", 4, vec![
            "тихий".to_string(),
            "нічний".to_string(),
            "чорний з білими плямами".to_string()
        ]),
    ]
}

/// Run the full bootstrap sequence against an administrative session.
pub async fn run(db: &Database) -> Result<(), AppError> {
    create_database_user(db).await?;
    insert_records(db, seed_cats()).await?;
    announce();
    Ok(())
}

/// Create the application user scoped to this database. Surfaces the driver
/// error unchanged if the principal already exists or the session lacks
/// privilege.
async fn create_database_user(db: &Database) -> Result<(), AppError> {
    info!(user = config::APP_USER, role = config::APP_ROLE, "creating database user");

    db.run_command(
        doc! {
            "createUser": config::APP_USER,
            "pwd": config::APP_PASSWORD,
            "roles": [ { "role": config::APP_ROLE, "db": config::DB_NAME } ],
        }
    ).await?;

    Ok(())
}

/// Insert the sample records as one batch. The collection is created
/// implicitly on first insert.
async fn insert_records(db: &Database, cats: Vec<Cat>) -> Result<(), AppError> {
    info!(count = cats.len(), collection = config::COLLECTION_NAME, "inserting sample records");

    let collection = db.collection::<Cat>(config::COLLECTION_NAME);
    collection.insert_many(cats).await?;

    Ok(())
}

fn announce() {
    println!("Database {} initialized with sample data", config::DB_NAME);
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{ self, Bson };

    #[test]
    fn seed_has_five_cats_in_source_order() {
        let cats = seed_cats();

        assert_eq!(cats.len(), 5);
        let names: Vec<&str> = cats
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["barsik", "whiskers", "mura", "snowball", "shadow"]);
    }

    #[test]
    fn barsik_first_feature_is_the_slipper_trait() {
        let cats = seed_cats();

        assert_eq!(cats[0].name, "barsik");
        assert_eq!(cats[0].features[0], "ходить в капці");
    }

    #[test]
    fn seed_ages_are_non_negative_integers() {
        for cat in seed_cats() {
            assert!(cat.age >= 0, "{} has a negative age", cat.name);

            let doc = bson::to_document(&cat).unwrap();
            assert!(matches!(doc.get("age"), Some(Bson::Int32(_))));
        }
    }

    #[test]
    fn seed_cats_have_no_preassigned_ids() {
        assert!(seed_cats().iter().all(|c| c.id.is_none()));
    }

    #[test]
    fn seed_features_each_have_three_entries() {
        for cat in seed_cats() {
            assert_eq!(cat.features.len(), 3, "{} feature count", cat.name);
        }
    }
}
