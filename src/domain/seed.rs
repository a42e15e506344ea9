//! Sample records used when no valid collection has been persisted

use crate::domain::{AdoptionStatus, CatRecord, NewCat};
use chrono::NaiveDate;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Constant, known-valid calendar dates.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Build the fixed seed collection. Each call mints fresh ids.
pub fn seed_cats() -> Vec<CatRecord> {
    let cats = [
        NewCat {
            name: "Whiskers".to_string(),
            age: 3.0,
            breed: "Siamese".to_string(),
            color: "Cream".to_string(),
            weight: 4.2,
            health_status: "Excellent".to_string(),
            neutered: true,
            vaccinated: true,
            adoption_status: AdoptionStatus::Available,
            description: "Playful and friendly Siamese cat with beautiful blue eyes.".to_string(),
            image_url: "https://images.pexels.com/photos/45201/kitty-cat-kitten-pet-45201.jpeg"
                .to_string(),
            intake_date: date(2023, 1, 15),
            last_checkup: date(2023, 10, 10),
        },
        NewCat {
            name: "Shadow".to_string(),
            age: 5.0,
            breed: "Maine Coon".to_string(),
            color: "Black".to_string(),
            weight: 7.8,
            health_status: "Good".to_string(),
            neutered: true,
            vaccinated: true,
            adoption_status: AdoptionStatus::Adopted,
            description: "Majestic Maine Coon with a gentle personality.".to_string(),
            image_url: "https://images.pexels.com/photos/982300/pexels-photo-982300.jpeg"
                .to_string(),
            intake_date: date(2022, 5, 20),
            last_checkup: date(2023, 9, 5),
        },
        NewCat {
            name: "Luna".to_string(),
            age: 1.0,
            breed: "Domestic Shorthair".to_string(),
            color: "Calico".to_string(),
            weight: 3.1,
            health_status: "Good".to_string(),
            neutered: false,
            vaccinated: true,
            adoption_status: AdoptionStatus::Pending,
            description: "Energetic kitten that loves to play with toys.".to_string(),
            image_url: "https://images.pexels.com/photos/2071873/pexels-photo-2071873.jpeg"
                .to_string(),
            intake_date: date(2023, 8, 10),
            last_checkup: date(2023, 10, 15),
        },
    ];

    cats.into_iter()
        .map(|cat| cat.into_record(Uuid::new_v4().to_string()))
        .collect()
}
