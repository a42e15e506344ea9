//! Output formatting utilities

use crate::domain::{AdoptionStatus, CatRecord, DashboardSummary};

/// Format cats as one aligned line each
pub fn format_cat_list(cats: &[&CatRecord]) -> String {
    if cats.is_empty() {
        return "No cats found".to_string();
    }

    let mut output = String::new();
    for cat in cats {
        output.push_str(&format!(
            "{}  {:<12} {:<20} {:>5} yrs  {}\n",
            cat.id, cat.name, cat.breed, cat.age, cat.adoption_status
        ));
    }
    output
}

/// Format every field of one cat
pub fn format_cat_detail(cat: &CatRecord) -> String {
    let yes_no = |b: bool| if b { "yes" } else { "no" };

    let mut output = String::new();
    output.push_str(&format!("{} ({})\n", cat.name, cat.id));
    output.push_str(&format!("  Breed:         {}\n", cat.breed));
    output.push_str(&format!("  Color:         {}\n", cat.color));
    output.push_str(&format!("  Age:           {} yrs\n", cat.age));
    output.push_str(&format!("  Weight:        {} kg\n", cat.weight));
    output.push_str(&format!("  Health:        {}\n", cat.health_status));
    output.push_str(&format!("  Neutered:      {}\n", yes_no(cat.neutered)));
    output.push_str(&format!("  Vaccinated:    {}\n", yes_no(cat.vaccinated)));
    output.push_str(&format!("  Status:        {}\n", cat.adoption_status));
    output.push_str(&format!(
        "  Intake date:   {}\n",
        cat.intake_date.format("%Y-%m-%d")
    ));
    output.push_str(&format!(
        "  Last checkup:  {}\n",
        cat.last_checkup.format("%Y-%m-%d")
    ));
    if !cat.image_url.is_empty() {
        output.push_str(&format!("  Image:         {}\n", cat.image_url));
    }
    if !cat.description.is_empty() {
        output.push_str(&format!("\n  {}\n", cat.description));
    }
    output
}

/// Format breeds one per line.
pub fn format_breed_list(breeds: &[String]) -> String {
    if breeds.is_empty() {
        return "No breeds found".to_string();
    }

    let mut output = String::new();
    for breed in breeds {
        output.push_str(breed);
        output.push('\n');
    }
    output
}

pub fn format_status_list(statuses: &[AdoptionStatus]) -> String {
    statuses.iter().map(|s| format!("{}\n", s)).collect()
}

/// Format the dashboard figures
pub fn format_dashboard(summary: &DashboardSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("Total cats:      {}\n", summary.total));
    output.push_str(&format!("Available:       {}\n", summary.available));
    output.push_str(&format!("Adopted:         {}\n", summary.adopted));
    output.push_str(&format!("Recent intakes:  {}\n", summary.recent_intakes));

    output.push_str("\nAdoption status\n");
    for share in &summary.by_status {
        output.push_str(&format!(
            "  {:<10} {:>3}  {:>5.1}%\n",
            share.status.as_str(),
            share.count,
            share.percentage
        ));
    }

    output.push_str("\nRecent arrivals\n");
    if summary.recent_cats.is_empty() {
        output.push_str("  none\n");
    }
    for cat in &summary.recent_cats {
        output.push_str(&format!(
            "  {}  {} ({})\n",
            cat.intake_date.format("%Y-%m-%d"),
            cat.name,
            cat.breed
        ));
    }
    output
}
