use crate::catalog::Catalog;
use crate::config::Config;
use crate::favorites::{DataTransfer, DropEffect, DropZone};
use crate::models::{PropertyCard, PropertyDetail};
use crate::search::{search, SearchForm, SearchOutcome, NO_MATCHES_MESSAGE};
use crate::session::{Action, Session};
use anyhow::{anyhow, bail, Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// One line of input to an interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Act(Action),
    /// Begin dragging a listing card
    Drag(String),
    /// Move the current drag over a region
    DragOver(DropZone),
    /// Release the current drag over a region
    Drop(DropZone),
    State,
    Quit,
}

/// List properties matching `form`.
pub fn list(catalog: &Catalog, form: &SearchForm, json: bool, config: &Config, out: &mut impl Write) -> Result<()> {
    let outcome = search(catalog.properties(), &form.to_criteria());

    if json {
        let cards: Vec<PropertyCard> = outcome
            .properties()
            .iter()
            .map(|p| PropertyCard::new(p, config))
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&cards)?)?;
        return Ok(());
    }

    match &outcome {
        SearchOutcome::NoMatches => writeln!(out, "{}", NO_MATCHES_MESSAGE)?,
        SearchOutcome::Matches(properties) => {
            for (i, property) in properties.iter().enumerate() {
                write_card(out, i + 1, &PropertyCard::new(property, config))?;
            }
        }
    }
    Ok(())
}

/// Print the detail view of one property.
pub fn show(catalog: &Catalog, id: &str, json: bool, config: &Config, out: &mut impl Write) -> Result<()> {
    let property = catalog
        .get(id)
        .ok_or_else(|| anyhow!("No property with id '{}'", id))?;
    let detail = PropertyDetail::new(property, config);

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&detail)?)?;
    } else {
        write_detail(out, &detail)?;
    }
    Ok(())
}

/// Drive a session from line-oriented input until EOF or `quit`.
/// Lines that do not parse are reported and skipped.
pub fn run_session(catalog: Catalog, config: &Config, input: impl BufRead, out: &mut impl Write) -> Result<Session> {
    let mut session = Session::new(catalog);
    let mut dragging: Option<DataTransfer> = None;

    for line in input.lines() {
        let line = line.context("Failed to read session input")?;
        let command = match parse_session_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                warn!("{}", err);
                writeln!(out, "error: {}", err)?;
                continue;
            }
        };

        match command {
            SessionCommand::Quit => break,
            SessionCommand::State => {
                writeln!(out, "{}", serde_json::to_string_pretty(&session.view(config))?)?;
            }
            SessionCommand::Drag(id) => {
                dragging = session.drag_start(&id);
                if dragging.is_none() {
                    debug!("Nothing to drag for {}", id);
                }
            }
            SessionCommand::DragOver(zone) => {
                let effect = match zone.drag_over() {
                    DropEffect::Copy => "copy",
                    DropEffect::None => "none",
                };
                writeln!(out, "drop effect: {}", effect)?;
            }
            SessionCommand::Drop(zone) => {
                let transfer = dragging.take().unwrap_or_default();
                session.dispatch(Action::Drop { zone, transfer });
                write_summary(out, &session)?;
            }
            SessionCommand::Act(action) => {
                session.dispatch(action);
                write_summary(out, &session)?;
            }
        }
    }

    Ok(session)
}

/// Parse one session line. Blank lines and `#` comments yield `None`.
///
/// ```text
/// search type=Flat min-price=200000 postcode=nw added-after=2023-01-01
/// fav prop1 | unfav prop1 | clear
/// drag prop1 | over favorites|listings | drop [favorites|listings]
/// open prop1 | close | toggle | reset | state | quit
/// ```
pub fn parse_session_line(line: &str) -> Result<Option<SessionCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default();
    let rest: Vec<&str> = words.collect();

    let command = match (verb, rest.as_slice()) {
        ("search", fields) => SessionCommand::Act(Action::Search(parse_search_fields(fields)?)),
        ("reset", []) => SessionCommand::Act(Action::ResetSearch),
        ("toggle", []) => SessionCommand::Act(Action::ToggleAdvancedSearch),
        ("fav", [id]) => SessionCommand::Act(Action::AddFavorite(id.to_string())),
        ("unfav", [id]) => SessionCommand::Act(Action::RemoveFavorite(id.to_string())),
        ("clear", []) => SessionCommand::Act(Action::ClearFavorites),
        ("open", [id]) => SessionCommand::Act(Action::Select(id.to_string())),
        ("close", []) => SessionCommand::Act(Action::CloseDetail),
        ("drag", [id]) => SessionCommand::Drag(id.to_string()),
        ("over", [zone]) => SessionCommand::DragOver(parse_zone(zone)?),
        ("drop", []) | ("drop", ["favorites"]) => SessionCommand::Drop(DropZone::Favorites),
        ("drop", ["listings"]) => SessionCommand::Drop(DropZone::Listings),
        ("state", []) => SessionCommand::State,
        ("quit", []) | ("exit", []) => SessionCommand::Quit,
        _ => bail!("Unrecognised session command '{}'", line),
    };
    Ok(Some(command))
}

fn parse_zone(zone: &str) -> Result<DropZone> {
    match zone {
        "favorites" => Ok(DropZone::Favorites),
        "listings" => Ok(DropZone::Listings),
        other => bail!("Unknown drop zone '{}'", other),
    }
}

fn parse_search_fields(fields: &[&str]) -> Result<SearchForm> {
    let mut form = SearchForm::default();
    for field in fields {
        let (key, value) = field
            .split_once('=')
            .ok_or_else(|| anyhow!("Expected key=value, got '{}'", field))?;
        match key {
            "type" => form.kind = Some(value.to_string()),
            "min-price" => form.min_price = value.to_string(),
            "max-price" => form.max_price = value.to_string(),
            "min-bedrooms" => form.min_bedrooms = value.to_string(),
            "max-bedrooms" => form.max_bedrooms = value.to_string(),
            "postcode" => form.postal_code_area = value.to_string(),
            "added-after" => form.added_after = Some(value.to_string()),
            other => bail!("Unknown search field '{}'", other),
        }
    }
    Ok(form)
}

fn write_card(out: &mut impl Write, position: usize, card: &PropertyCard) -> Result<()> {
    writeln!(out, "{}. {} ({})", position, card.kind, card.price)?;
    writeln!(out, "   {} bedrooms, {}", card.bedrooms, card.postal_code_area)?;
    writeln!(out, "   Added: {}", card.added)?;
    writeln!(out, "   ID: {}", card.id)?;
    writeln!(out)?;
    Ok(())
}

fn write_detail(out: &mut impl Write, detail: &PropertyDetail) -> Result<()> {
    writeln!(out, "{}", detail.title)?;
    writeln!(out, "Price: {}", detail.price)?;
    writeln!(out, "Bedrooms: {}", detail.bedrooms)?;
    writeln!(out, "Tenure: {}", detail.tenure)?;
    writeln!(out, "Postal Code: {}", detail.postal_code_area)?;
    writeln!(out, "Added: {}", detail.added)?;
    writeln!(out)?;
    writeln!(out, "{}", detail.description)?;
    writeln!(out)?;
    writeln!(out, "Gallery: {}", detail.gallery.join(", "))?;
    writeln!(out, "Floor plan: {}", detail.floor_plan)?;
    if let Some(map_url) = &detail.map_url {
        writeln!(out, "Map: {}", map_url)?;
    }
    Ok(())
}

fn write_summary(out: &mut impl Write, session: &Session) -> Result<()> {
    let favorites: Vec<&str> = session
        .favorites()
        .list()
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    let inspected = session.inspected().map_or("-", |p| p.id.as_str());
    writeln!(
        out,
        "results: {} | favorites: [{}] | inspecting: {}",
        session.results().len(),
        favorites.join(", "),
        inspected
    )?;
    Ok(())
}
