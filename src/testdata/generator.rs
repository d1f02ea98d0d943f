use chrono::{Days, NaiveDate, Utc};
use clap::ValueEnum;
use rand::Rng;
use rand::seq::SliceRandom;

pub const FIRST_NAMES: [&str; 24] = [
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda",
    "William", "Elizabeth", "David", "Barbara", "Richard", "Susan", "Joseph", "Jessica",
    "Thomas", "Sarah", "Charles", "Karen", "Christopher", "Nancy", "Daniel", "Lisa",
];

pub const LAST_NAMES: [&str; 24] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas",
    "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White",
];

pub const EMAIL_DOMAINS: [&str; 5] = [
    "gmail.com", "yahoo.com", "outlook.com", "test.com", "example.com",
];

pub const STREETS: [&str; 7] = [
    "Main St", "Oak Ave", "Maple Rd", "Cedar Ln", "Pine Dr", "Elm St", "Washington Blvd",
];

pub const CITIES: [&str; 6] = [
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia",
];

pub const STATES: [&str; 6] = ["NY", "CA", "IL", "TX", "AZ", "PA"];

const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const PASSWORD_SPECIAL: &str = "!@#$%^&*";

/// Kinds of random test data the toolkit can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DataKind {
    Name,
    Email,
    Phone,
    String,
    Number,
    Date,
    Address,
    Password,
}

/// Generate one value of the requested kind. `string_length` only applies to
/// `DataKind::String`.
pub fn generate(kind: DataKind, string_length: usize, rng: &mut impl Rng) -> String {
    match kind {
        DataKind::Name => random_name(rng),
        DataKind::Email => random_email(rng),
        DataKind::Phone => random_phone(rng),
        DataKind::String => random_string(string_length, rng),
        DataKind::Number => random_number(rng).to_string(),
        DataKind::Date => random_date(rng),
        DataKind::Address => random_address(rng),
        DataKind::Password => random_password(rng),
    }
}

/// Generate `count` values, one per line.
pub fn generate_many(kind: DataKind, count: usize, string_length: usize, rng: &mut impl Rng) -> String {
    let count = count.max(1);
    (0..count)
        .map(|_| generate(kind, string_length, rng))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn random_name(rng: &mut impl Rng) -> String {
    format!(
        "{} {}",
        FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())],
        LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())]
    )
}

pub fn random_email(rng: &mut impl Rng) -> String {
    // 8-char lowercase alphanumeric local part
    let local: String = (0..8)
        .map(|_| {
            let c = rng.gen_range(0..36u32);
            char::from_digit(c, 36).unwrap_or('x')
        })
        .collect();
    format!(
        "{}@{}",
        local,
        EMAIL_DOMAINS[rng.gen_range(0..EMAIL_DOMAINS.len())]
    )
}

pub fn random_phone(rng: &mut impl Rng) -> String {
    let area_code = rng.gen_range(100..1000);
    let prefix = rng.gen_range(100..1000);
    let line_number = rng.gen_range(1000..10000);
    format!("({}) {}-{}", area_code, prefix, line_number)
}

pub fn random_string(length: usize, rng: &mut impl Rng) -> String {
    let chars: Vec<char> = ALPHANUMERIC.chars().collect();
    (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect()
}

pub fn random_number(rng: &mut impl Rng) -> u32 {
    rng.gen_range(1..=1000)
}

/// Random ISO date between 2020-01-01 and today.
pub fn random_date(rng: &mut impl Rng) -> String {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default();
    let end = Utc::now().date_naive();
    let span_days = (end - start).num_days().max(0) as u64;
    let offset = rng.gen_range(0..=span_days);

    start
        .checked_add_days(Days::new(offset))
        .unwrap_or(end)
        .format("%Y-%m-%d")
        .to_string()
}

/// City and state are picked with a shared index so they stay consistent.
pub fn random_address(rng: &mut impl Rng) -> String {
    let street_number = rng.gen_range(1..10000);
    let street = STREETS[rng.gen_range(0..STREETS.len())];
    let city_index = rng.gen_range(0..CITIES.len());
    let zip = rng.gen_range(10000..100000);

    format!(
        "{} {}, {}, {} {}",
        street_number, street, CITIES[city_index], STATES[city_index], zip
    )
}

/// 12 characters with at least one uppercase, lowercase, digit, and special
/// character, shuffled so the guaranteed ones are not positional.
pub fn random_password(rng: &mut impl Rng) -> String {
    let upper: Vec<char> = ('A'..='Z').collect();
    let lower: Vec<char> = ('a'..='z').collect();
    let digits: Vec<char> = ('0'..='9').collect();
    let special: Vec<char> = PASSWORD_SPECIAL.chars().collect();
    let all: Vec<char> = upper
        .iter()
        .chain(lower.iter())
        .chain(digits.iter())
        .chain(special.iter())
        .copied()
        .collect();

    let mut password = vec![
        upper[rng.gen_range(0..upper.len())],
        lower[rng.gen_range(0..lower.len())],
        digits[rng.gen_range(0..digits.len())],
        special[rng.gen_range(0..special.len())],
    ];
    for _ in password.len()..12 {
        password.push(all[rng.gen_range(0..all.len())]);
    }
    password.shuffle(rng);

    password.into_iter().collect()
}
