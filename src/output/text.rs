use colored::Colorize;

use crate::api::models::{Institution, Stat, UserRecord};
use crate::error::AppResult;

pub fn print_line(line: &str) -> AppResult<()> {
    println!("{line}");
    Ok(())
}

pub fn print_debug(message: &str) {
    eprintln!("{}", message.yellow());
}

pub fn print_profile(record: &UserRecord, profile_link: &str) -> AppResult<()> {
    println!();
    println!("{}", "=== Profile ===".cyan().bold());
    println!();

    let badge = if record.verified {
        format!(" {}", "✓".blue())
    } else {
        String::new()
    };
    print_field("Name", &format!("{}{badge}", record.display_name()));
    print_field("ID", &record.id.to_string());
    print_field(
        "Screen name",
        record.screen_name.as_deref().unwrap_or("(not set)"),
    );
    print_field("Link", profile_link);
    if let Some(photo) = non_empty(record.photo_200.as_deref()) {
        print_field("Avatar", photo);
    }
    print_field("Profile", if record.is_closed { "closed" } else { "open" });
    print_field("Presence", if record.online { "online" } else { "offline" });
    if let Some(status) = non_empty(record.status.as_deref()) {
        print_field("Status", status);
    }

    let about = about_rows(record);
    if !about.is_empty() {
        println!();
        println!("{}", "=== About ===".yellow().bold());
        for (label, value) in about {
            print_field(label, value);
        }
    }

    if !record.universities.is_empty() || !record.schools.is_empty() {
        println!();
        println!("{}", "=== Education ===".yellow().bold());
        for university in &record.universities {
            print_field("University", institution_name(university));
        }
        for school in &record.schools {
            print_field("School", institution_name(school));
        }
    }

    println!();
    println!("{}", "=== Statistics ===".yellow().bold());
    for (label, value) in stat_rows(record) {
        print_field(label, &value.to_string());
    }

    Ok(())
}

fn print_field(label: &str, value: &str) {
    println!("{} {value}", format!("{label}:").green());
}

fn institution_name(institution: &Institution) -> &str {
    non_empty(institution.name.as_deref()).unwrap_or("(not set)")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn about_rows(record: &UserRecord) -> Vec<(&'static str, &str)> {
    [
        ("Activities", record.activities.as_deref()),
        ("Interests", record.interests.as_deref()),
        ("Music", record.music.as_deref()),
        ("Movies", record.movies.as_deref()),
        ("TV", record.tv.as_deref()),
        ("Books", record.books.as_deref()),
        ("Games", record.games.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, value)| non_empty(value).map(|value| (label, value)))
    .collect()
}

fn stat_rows(record: &UserRecord) -> Vec<(&'static str, u64)> {
    vec![
        ("Friends", record.stat(Stat::Friends)),
        ("Followers", record.stat(Stat::Followers)),
        // Wall and video counts come back wrong from current instances,
        // so those rows stay off until the endpoint is fixed.
        ("Photos", record.stat(Stat::Photos)),
        ("Audios", record.stat(Stat::Audios)),
        ("Notes", record.stat(Stat::Notes)),
        ("Groups", record.stat(Stat::Groups)),
    ]
}
