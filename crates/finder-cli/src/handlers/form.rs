//! Interactive form handler.
//!
//! Drives a [`FormSession`] from stdin prompts: field edits dispatch reducer
//! events, `s` submits, and the result area is re-rendered after every
//! submission exactly as the renderer sees the state.

use std::sync::Arc;

use anyhow::Result;

use finder_client::{DefaultFilterClient, FilterClientConfig};
use finder_core::{
    DiskType, FilterApi, FormEvent, FormSession, LOCATIONS, MAX_STORAGE_INDEX, RAM_OPTIONS,
    STORAGE_MARKS,
};

use crate::presentation;
use crate::utils::input;

/// Execute the interactive form command.
pub async fn execute(config: &FilterClientConfig) -> Result<()> {
    let api: Arc<dyn FilterApi> = Arc::new(DefaultFilterClient::new(config));
    let mut session = FormSession::new(api);

    println!("Server finder - interactive filter");

    loop {
        println!();
        println!("{}", presentation::filter_summary(&session.state().filter));
        println!();
        println!("[1] storage range  [2] toggle RAM  [3] disk type  [4] location");
        println!("[s] search  [q] quit");

        match input::prompt_string("Choose")?.as_str() {
            "1" => edit_storage(&mut session)?,
            "2" => toggle_ram(&mut session)?,
            "3" => edit_disk(&mut session)?,
            "4" => edit_location(&mut session)?,
            "s" => {
                // Render the transient state before the request resolves
                println!("{}", presentation::render_results(true, &[]));
                session.submit().await;
                let state = session.state();
                println!("{}", presentation::render_results(state.loading, &state.results));
            }
            "q" => break,
            other => eprintln!("Unknown choice '{other}'."),
        }
    }

    Ok(())
}

fn edit_storage(session: &mut FormSession) -> Result<()> {
    for (index, mark) in STORAGE_MARKS.iter().enumerate() {
        println!("  [{index:2}] {mark}");
    }
    let lo = input::prompt_index("Lower mark", MAX_STORAGE_INDEX)?;
    let hi = input::prompt_index("Upper mark", MAX_STORAGE_INDEX)?;
    session.update(FormEvent::SetStorageLo(lo));
    session.update(FormEvent::SetStorageHi(hi));
    Ok(())
}

fn toggle_ram(session: &mut FormSession) -> Result<()> {
    let selected = &session.state().filter.ram;
    for (index, option) in RAM_OPTIONS.iter().enumerate() {
        let checked = if selected.iter().any(|r| r == option) {
            "x"
        } else {
            " "
        };
        println!("  [{index}] [{checked}] {option}");
    }
    let index = input::prompt_index("Toggle", RAM_OPTIONS.len() - 1)?;
    session.update(FormEvent::ToggleRam(RAM_OPTIONS[index].to_string()));
    Ok(())
}

fn edit_disk(session: &mut FormSession) -> Result<()> {
    for (index, disk) in DiskType::ALL.iter().enumerate() {
        println!("  [{index}] {disk}");
    }
    let choice = input::prompt_optional_index("Disk type", DiskType::ALL.len() - 1)?;
    session.update(FormEvent::SetDiskType(choice.map(|i| DiskType::ALL[i])));
    Ok(())
}

fn edit_location(session: &mut FormSession) -> Result<()> {
    for (index, location) in LOCATIONS.iter().enumerate() {
        println!("  [{index}] {location}");
    }
    let choice = input::prompt_optional_index("Location", LOCATIONS.len() - 1)?;
    session.update(FormEvent::SetLocation(
        choice.map(|i| LOCATIONS[i].to_string()),
    ));
    Ok(())
}
