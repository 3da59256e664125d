//! CRUD operations on the `cats` collection, run through the scoped
//! application credentials. Handlers return data; rendering happens at the
//! CLI layer.

use futures_util::TryStreamExt;
use mongodb::Database;
use mongodb::bson::doc;
use tracing::debug;

use crate::config;
use crate::error::AppError;
use crate::models::cat::Cat;

/// Outcome of an age update on an existing cat.
#[derive(Debug, PartialEq, Eq)]
pub enum AgeUpdate {
    Updated,
    /// The cat exists but already had that age.
    Unchanged,
}

/// Outcome of adding a feature to an existing cat.
#[derive(Debug, PartialEq, Eq)]
pub enum FeatureUpdate {
    Added,
    AlreadyPresent,
}

fn cats(db: &Database) -> mongodb::Collection<Cat> {
    db.collection::<Cat>(config::COLLECTION_NAME)
}

pub async fn list_cats(db: &Database) -> Result<Vec<Cat>, AppError> {
    let cursor = cats(db).find(doc! {}).await?;
    let all: Vec<Cat> = cursor.try_collect().await?;

    debug!(count = all.len(), "listed cats");
    Ok(all)
}

pub async fn get_cat(db: &Database, name: &str) -> Result<Cat, AppError> {
    cats(db)
        .find_one(doc! { "name": name }).await?
        .ok_or_else(|| AppError::NotFound(name.to_string()))
}

/// Insert one cat. Unlike the bootstrap seed, this path refuses a duplicate
/// name and a negative age.
pub async fn add_cat(
    db: &Database,
    name: &str,
    age: i32,
    features: Vec<String>
) -> Result<Cat, AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }
    if age < 0 {
        return Err(AppError::Validation("age must be non-negative".to_string()));
    }

    let collection = cats(db);
    if collection.find_one(doc! { "name": name }).await?.is_some() {
        return Err(AppError::DuplicateName(name.to_string()));
    }

    let mut cat = Cat::new(name, age, features);
    let result = collection.insert_one(&cat).await?;
    cat.id = result.inserted_id.as_object_id();

    debug!(name, "cat inserted");
    Ok(cat)
}

pub async fn update_age(db: &Database, name: &str, new_age: i32) -> Result<AgeUpdate, AppError> {
    if new_age < 0 {
        return Err(AppError::Validation("age must be non-negative".to_string()));
    }

    let result = cats(db)
        .update_one(doc! { "name": name }, doc! { "$set": { "age": new_age } }).await?;

    if result.matched_count == 0 {
        return Err(AppError::NotFound(name.to_string()));
    }

    Ok(if result.modified_count == 1 { AgeUpdate::Updated } else { AgeUpdate::Unchanged })
}

pub async fn add_feature(
    db: &Database,
    name: &str,
    feature: &str
) -> Result<FeatureUpdate, AppError> {
    let result = cats(db)
        .update_one(
            doc! { "name": name },
            doc! { "$addToSet": { "features": feature } }
        ).await?;

    if result.matched_count == 0 {
        return Err(AppError::NotFound(name.to_string()));
    }

    Ok(if result.modified_count == 1 {
        FeatureUpdate::Added
    } else {
        FeatureUpdate::AlreadyPresent
    })
}

pub async fn remove_cat(db: &Database, name: &str) -> Result<(), AppError> {
    let result = cats(db).delete_one(doc! { "name": name }).await?;

    if result.deleted_count == 0 {
        return Err(AppError::NotFound(name.to_string()));
    }

    Ok(())
}

/// Delete every document in the collection, returning how many were removed.
/// The caller is responsible for confirming first.
pub async fn remove_all_cats(db: &Database) -> Result<u64, AppError> {
    let result = cats(db).delete_many(doc! {}).await?;
    Ok(result.deleted_count)
}
