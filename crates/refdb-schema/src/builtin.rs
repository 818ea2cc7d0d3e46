//! Schemas for the reference datasets shipped in `database/`.

use crate::checks::{DATE, HTTP_URL};
use crate::error::Result;
use crate::rule::FieldRule;
use crate::schema::{KeyPolicy, Schema};

/// Datasets checked when no files are given, in check order.
pub const DEFAULT_DATASETS: &[&str] = &[
    "categories",
    "channels",
    "countries",
    "languages",
    "regions",
    "subdivisions",
];

const CHANNEL_ID: &str = r"^[A-Za-z0-9]+(?:\.[a-z]{2})?$";
const COUNTRY_CODE: &str = r"^[A-Z]{2}$";
const LANGUAGE_CODE: &str = r"^[a-z]{3}$";
const SUBDIVISION_CODE: &str = r"^[A-Z]{2}-[A-Z0-9]{1,3}$";
const REGION_CODE: &str = r"^[A-Z]{2,7}$";
const BROADCAST_AREA: &str = r"^(s/[A-Z]{2}-[A-Z0-9]{1,3}|c/[A-Z]{2}|r/[A-Z]{2,7})$";
const CATEGORY_ID: &str = r"^[a-z]+$";

pub(crate) fn schemas() -> Result<Vec<Schema>> {
    Ok(vec![
        categories()?,
        channels()?,
        countries()?,
        languages()?,
        regions()?,
        subdivisions()?,
    ])
}

fn categories() -> Result<Schema> {
    Schema::builder("categories")
        .field("id", FieldRule::required().pattern(CATEGORY_ID)?)
        .field("name", FieldRule::required().pattern(r"^[A-Za-z]+$")?)
        .build()
}

fn channels() -> Result<Schema> {
    Schema::builder("channels")
        .field("id", FieldRule::required().pattern(CHANNEL_ID)?)
        .field(
            "name",
            FieldRule::required().pattern(r"^[\sa-zA-Z\x{C0}-\x{FF}0-9\-!:&.+'/»#%°$@?()¡]+$")?,
        )
        .field("native_name", FieldRule::optional())
        .field("network", FieldRule::optional())
        .field("country", FieldRule::required().pattern(COUNTRY_CODE)?)
        .field("subdivision", FieldRule::optional().pattern(SUBDIVISION_CODE)?)
        .field("city", FieldRule::optional())
        .field(
            "broadcast_area",
            FieldRule::required().list().pattern(BROADCAST_AREA)?,
        )
        .field("languages", FieldRule::required().list().pattern(LANGUAGE_CODE)?)
        .field("categories", FieldRule::optional().list().pattern(CATEGORY_ID)?)
        .field("is_nsfw", FieldRule::required().boolean())
        .field("launched", FieldRule::optional().check(DATE))
        .field("closed", FieldRule::optional().check(DATE))
        .field("replaced_by", FieldRule::optional().pattern(CHANNEL_ID)?)
        .field("website", FieldRule::optional().check(HTTP_URL))
        .field("logo", FieldRule::optional().check(HTTP_URL))
        .unique("id", KeyPolicy::CaseInsensitive)
        .build()
}

fn countries() -> Result<Schema> {
    Schema::builder("countries")
        .field(
            "name",
            FieldRule::required().pattern(r"^[\sA-Za-z\x{C0}-\x{FF}().'\-]+$")?,
        )
        .field("code", FieldRule::required().pattern(COUNTRY_CODE)?)
        .field("languages", FieldRule::required().list().pattern(LANGUAGE_CODE)?)
        .field(
            "flag",
            FieldRule::required().pattern(r"^[\x{1F1E6}-\x{1F1FF}]{2}$")?,
        )
        .build()
}

fn languages() -> Result<Schema> {
    Schema::builder("languages")
        .field("code", FieldRule::required().pattern(LANGUAGE_CODE)?)
        .field("name", FieldRule::required())
        .build()
}

fn regions() -> Result<Schema> {
    Schema::builder("regions")
        .field("code", FieldRule::required().pattern(REGION_CODE)?)
        .field("name", FieldRule::required())
        .field("countries", FieldRule::optional().list().pattern(COUNTRY_CODE)?)
        .build()
}

fn subdivisions() -> Result<Schema> {
    Schema::builder("subdivisions")
        .field("country", FieldRule::required().pattern(COUNTRY_CODE)?)
        .field("name", FieldRule::required())
        .field("code", FieldRule::required().pattern(SUBDIVISION_CODE)?)
        .build()
}
