use serde::{ Deserialize, Serialize };
use mongodb::bson::oid::ObjectId;

/// One cat document in the `cats` collection. `features` keeps whatever order
/// it was written with; nothing deduplicates or sorts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cat {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub age: i32,
    pub features: Vec<String>,
}

impl Cat {
    pub fn new(name: impl Into<String>, age: i32, features: Vec<String>) -> Self {
        Cat {
            id: None,
            name: name.into(),
            age,
            features,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{ self, Bson };

    #[test]
    fn serializes_without_id_when_unset() {
        let cat = Cat::new("barsik", 3, vec!["рудий".to_string()]);
        let doc = bson::to_document(&cat).unwrap();

        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("name").unwrap(), "barsik");
    }

    #[test]
    fn age_is_stored_as_int32() {
        let cat = Cat::new("whiskers", 5, vec![]);
        let doc = bson::to_document(&cat).unwrap();

        assert_eq!(doc.get("age"), Some(&Bson::Int32(5)));
    }

    #[test]
    fn features_keep_source_order() {
        let cat = Cat::new("mura", 2, vec![
            "грається з клубком".to_string(),
            "спить весь день".to_string(),
            "чорний".to_string()
        ]);
        let doc = bson::to_document(&cat).unwrap();

        let features = doc.get_array("features").unwrap();
        assert_eq!(features[0], Bson::String("грається з клубком".to_string()));
        assert_eq!(features[2], Bson::String("чорний".to_string()));
    }

    #[test]
    fn round_trips_through_bson() {
        let cat = Cat::new("shadow", 4, vec!["тихий".to_string()]);
        let doc = bson::to_document(&cat).unwrap();
        let back: Cat = bson::from_document(doc).unwrap();

        assert_eq!(back, cat);
    }
}
