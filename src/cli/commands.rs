//! CLI command definitions

use crate::domain::{AdoptionStatus, CatFilter, CatUpdate, NewCat};
use crate::error::{Result, ShelterError};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "catshelter")]
#[command(about = "Cat shelter records: intake, adoption status and health", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new shelter
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// List cats, optionally filtered
    List(ListArgs),

    /// Show one cat
    Show {
        id: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a cat
    Add(AddArgs),

    /// Change fields of an existing cat
    Edit(EditArgs),

    /// Delete a cat
    Delete { id: String },

    /// List the breeds currently in the shelter
    Breeds,

    /// List the adoption statuses
    Statuses,

    /// Show shelter statistics
    Dashboard {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Breed contains (case-insensitive)
    #[arg(long)]
    pub breed: Option<String>,

    /// Adoption status (available, adopted, pending, foster)
    #[arg(long)]
    pub status: Option<String>,

    /// Minimum age in years (inclusive)
    #[arg(long)]
    pub min_age: Option<f64>,

    /// Maximum age in years (inclusive)
    #[arg(long)]
    pub max_age: Option<f64>,

    /// Health status contains (case-insensitive)
    #[arg(long)]
    pub health: Option<String>,

    /// Print the records as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn to_filter(&self) -> Result<CatFilter> {
        Ok(CatFilter {
            breed: self.breed.clone(),
            adoption_status: self.status.as_deref().map(parse_status).transpose()?,
            min_age: self.min_age,
            max_age: self.max_age,
            health_status: self.health.clone(),
        })
    }
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    /// Age in years
    #[arg(long, default_value_t = 0.0)]
    pub age: f64,

    #[arg(long, default_value = "")]
    pub breed: String,

    #[arg(long, default_value = "")]
    pub color: String,

    /// Weight in kilograms
    #[arg(long, default_value_t = 0.0)]
    pub weight: f64,

    /// Excellent, Good, Fair or Poor
    #[arg(long, default_value = "Good")]
    pub health: String,

    #[arg(long)]
    pub neutered: bool,

    #[arg(long)]
    pub vaccinated: bool,

    #[arg(long, default_value = "available")]
    pub status: String,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long, default_value = "")]
    pub image_url: String,

    /// YYYY-MM-DD (default: today)
    #[arg(long)]
    pub intake_date: Option<String>,

    /// YYYY-MM-DD (default: today)
    #[arg(long)]
    pub last_checkup: Option<String>,
}

impl AddArgs {
    pub fn to_new_cat(&self, today: NaiveDate) -> Result<NewCat> {
        let mut cat = NewCat::with_defaults(self.name.clone(), today);
        cat.age = self.age;
        cat.breed = self.breed.clone();
        cat.color = self.color.clone();
        cat.weight = self.weight;
        cat.health_status = self.health.clone();
        cat.neutered = self.neutered;
        cat.vaccinated = self.vaccinated;
        cat.adoption_status = parse_status(&self.status)?;
        cat.description = self.description.clone();
        cat.image_url = self.image_url.clone();
        if let Some(date) = &self.intake_date {
            cat.intake_date = parse_date(date)?;
        }
        if let Some(date) = &self.last_checkup {
            cat.last_checkup = parse_date(date)?;
        }
        Ok(cat)
    }
}

#[derive(Args, Debug)]
pub struct EditArgs {
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub age: Option<f64>,

    #[arg(long)]
    pub breed: Option<String>,

    #[arg(long)]
    pub color: Option<String>,

    #[arg(long)]
    pub weight: Option<f64>,

    /// Excellent, Good, Fair or Poor
    #[arg(long)]
    pub health: Option<String>,

    /// true or false
    #[arg(long)]
    pub neutered: Option<bool>,

    /// true or false
    #[arg(long)]
    pub vaccinated: Option<bool>,

    #[arg(long)]
    pub status: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub image_url: Option<String>,

    #[arg(long)]
    pub intake_date: Option<String>,

    #[arg(long)]
    pub last_checkup: Option<String>,
}

impl EditArgs {
    pub fn to_update(&self) -> Result<CatUpdate> {
        Ok(CatUpdate {
            name: self.name.clone(),
            age: self.age,
            breed: self.breed.clone(),
            color: self.color.clone(),
            weight: self.weight,
            health_status: self.health.clone(),
            neutered: self.neutered,
            vaccinated: self.vaccinated,
            adoption_status: self.status.as_deref().map(parse_status).transpose()?,
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            intake_date: self.intake_date.as_deref().map(parse_date).transpose()?,
            last_checkup: self.last_checkup.as_deref().map(parse_date).transpose()?,
        })
    }
}

fn parse_status(value: &str) -> Result<AdoptionStatus> {
    AdoptionStatus::from_str(value)
        .map_err(|_| ShelterError::InvalidAdoptionStatus(value.to_string()))
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ShelterError::InvalidDate(value.to_string()))
}
