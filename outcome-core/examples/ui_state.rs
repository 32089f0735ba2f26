//! Example of reducing fetch outcomes to presentation states.
//!
//! Run with `RUST_LOG=debug cargo run --example ui_state` to see the
//! producer-side log lines.

use std::io;

use outcome_core::{Fault, Outcome};
use thiserror::Error;

/// Payload the fake backend hands back.
#[derive(Debug, Clone)]
struct Profile {
    name: String,
    karma: i32,
}

/// Closed failure taxonomy for profile lookups.
#[derive(Debug, Error)]
enum ProfileFault {
    #[error("profile not found")]
    NotFound,
    #[error("profile id must be positive")]
    InvalidId,
    #[error("unexpected failure: {cause}")]
    Unexpected {
        #[from]
        cause: io::Error,
    },
}

impl Fault for ProfileFault {}

/// What the screen shows for one lookup.
#[derive(Debug)]
enum Screen {
    Profile(String),
    Error(String),
}

fn fetch_profile(id: i32) -> Outcome<Profile, ProfileFault> {
    log::debug!("fetching profile {id}");
    if id <= 0 {
        return Outcome::Failure(ProfileFault::InvalidId);
    }
    match id {
        404 => Outcome::Failure(ProfileFault::NotFound),
        503 => Outcome::Failure(
            io::Error::new(io::ErrorKind::ConnectionRefused, "backend unreachable").into(),
        ),
        _ => Outcome::Success(Profile {
            name: format!("user-{id}"),
            karma: id * 10,
        }),
    }
}

fn message_for(fault: &ProfileFault) -> String {
    match fault {
        ProfileFault::NotFound => "No such profile.".to_string(),
        ProfileFault::InvalidId => "Profile ids start at 1.".to_string(),
        ProfileFault::Unexpected { cause } => format!("Something went wrong: {cause}."),
    }
}

fn main() {
    env_logger::init();

    // Example 1: chained handlers, one of which runs per lookup
    println!("=== Example 1: Chained Handlers ===");
    for id in [7, 404, -3, 503] {
        let mut screen = Screen::Error("not reduced yet".to_string());
        let _ = fetch_profile(id)
            .on_success(|profile| {
                screen = Screen::Profile(format!("{} ({} karma)", profile.name, profile.karma));
            })
            .on_failure(|fault| {
                log::warn!("lookup {id} failed: {fault}");
                screen = Screen::Error(message_for(fault));
            });
        println!("  id {id:>4} -> {screen:?}");
    }

    // Example 2: defaulting instead of handling
    println!("\n=== Example 2: Defaulting ===");
    let karma = fetch_profile(42)
        .success()
        .map(|profile| profile.karma)
        .unwrap_or(0);
    println!("  karma for id 42: {karma}");

    let fallback = Profile {
        name: "anonymous".to_string(),
        karma: 0,
    };
    let profile = fetch_profile(404).success_or(fallback);
    println!("  profile for id 404: {} ({} karma)", profile.name, profile.karma);

    // Example 3: matching on the variant directly
    println!("\n=== Example 3: Matching ===");
    match fetch_profile(9) {
        Outcome::Success(profile) => println!("  loaded {}", profile.name),
        Outcome::Failure(fault) => println!("  failed: {}", message_for(&fault)),
    }
}
