//! Replays the saved dashboard state onto a freshly loaded page.

use log::{debug, info, warn};
use strum::IntoEnumIterator;

use crate::{
    cfg::Config,
    error::ViewError,
    model::{SectionStatus, Tab},
    page::{Node, Page, SELECTED, ids},
    store::{
        KeyValueStore, StoreError,
        entry::{self, CURRENT_NAV, LOAD_RESOURCE_FORM, OPEN_COURSES},
    },
    view::{highlight_nav, show_only},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restored {
    /// The page is not one of the dashboard routes.
    NotOnRoute,
    /// Nothing was saved yet; the statistics tab was selected.
    FirstVisit,
    /// Saved state was applied.
    ReturningVisit,
}

/// Restores the dashboard if `path` is one of the configured routes.
pub fn restore_on_route<P, S>(
    page: &P,
    store: &mut S,
    config: &Config,
    path: &str,
) -> Result<Restored, ViewError>
where
    P: Page,
    S: KeyValueStore,
{
    if !config.is_restore_path(path) {
        debug!("not restoring state on {path}");
        return Ok(Restored::NotOnRoute);
    }
    restore(page, store)
}

/// Restores every piece of saved state, or selects the statistics tab when
/// nothing has been saved.
///
/// Saved colours and open courses that refer to elements no longer on the
/// page are skipped, as are saved values that fail to parse.
pub fn restore<P, S>(page: &P, store: &mut S) -> Result<Restored, ViewError>
where
    P: Page,
    S: KeyValueStore,
{
    info!("Updating state...");

    if store.is_empty()? {
        let nav = page.require(&Tab::Statistics.nav_id())?;
        let panel = page.require(Tab::Statistics.panel_id())?;
        nav.add_class(SELECTED);
        panel.show();
        debug!("first visit, selected {}", Tab::Statistics);
        return Ok(Restored::FirstVisit);
    }

    let tab = match CURRENT_NAV.load(store) {
        Ok(Some(tab)) => tab,
        Ok(None) => Tab::Statistics,
        Err(e) => {
            warn!("ignoring saved tab: {e}");
            Tab::Statistics
        }
    };

    restore_nav(page, tab);
    restore_panel(page, tab);
    restore_add_button(page, tab);
    restore_section_colours(page, store)?;
    restore_open_courses(page, store);
    restore_resource_form(page, store)?;

    debug!("restored saved state on tab {tab}");
    Ok(Restored::ReturningVisit)
}

fn restore_nav<P: Page>(page: &P, tab: Tab) {
    let Some(nav) = page.element(ids::NAV) else {
        return;
    };
    for link in nav.children() {
        link.remove_class(SELECTED);
    }
    match page.element(&tab.nav_id()) {
        Some(link) => link.add_class(SELECTED),
        None => highlight_nav(&nav, tab),
    }
    if let Some(select) = page.element(ids::TAB_SELECT) {
        select.set_value(tab.panel_id());
    }
}

fn restore_panel<P: Page>(page: &P, tab: Tab) {
    if page.element(ids::NAV).is_none() {
        return;
    }
    let panels: Vec<_> = Tab::iter()
        .filter_map(|t| page.element(t.panel_id()).map(|panel| (t, panel)))
        .collect();
    show_only(&panels, Some(tab));
}

/// Only ever reveals the button; it is rendered hidden.
fn restore_add_button<P: Page>(page: &P, tab: Tab) {
    if let Some(button) = page.element(ids::ADD_CONTENT_BUTTON)
        && tab.accepts_content()
    {
        button.show();
    }
}

fn restore_section_colours<P, S>(page: &P, store: &S) -> Result<(), StoreError>
where
    P: Page,
    S: KeyValueStore,
{
    for course in store
        .keys()?
        .iter()
        .filter_map(|key| entry::parse_course_sections_key(key))
    {
        let sections = match entry::course_sections(course).load(store) {
            Ok(sections) => sections.unwrap_or_default(),
            Err(e) => {
                warn!("skipping section colours of course {course}: {e}");
                continue;
            }
        };
        for saved in sections {
            if let Some(card) = page.element(&ids::section(course, saved.id)) {
                card.add_class(saved.colour.class());
            }
        }
    }

    // Sections added since the last visit have no saved colour yet.
    for card in page.elements_with_id_prefix(ids::SECTION_PREFIX) {
        let has_colour = card
            .class_names()
            .iter()
            .any(|c| c.starts_with(SectionStatus::CLASS_PREFIX));
        if !has_colour {
            card.add_class(SectionStatus::ToDo.class());
        }
    }
    Ok(())
}

fn restore_open_courses<P, S>(page: &P, store: &S)
where
    P: Page,
    S: KeyValueStore,
{
    let courses = match OPEN_COURSES.load(store) {
        Ok(courses) => courses.unwrap_or_default(),
        Err(e) => {
            warn!("skipping open courses: {e}");
            return;
        }
    };
    for course in courses {
        let down = page.element(&ids::down_arrow(course));
        let up = page.element(&ids::up_arrow(course));
        let sections = page.element(&ids::section_list(course));
        let (Some(down), Some(up), Some(sections)) = (down, up, sections) else {
            warn!("course {course} is not on the page, not expanding it");
            continue;
        };
        down.hide();
        up.show();
        sections.show();
    }
}

fn restore_resource_form<P, S>(page: &P, store: &mut S) -> Result<(), ViewError>
where
    P: Page,
    S: KeyValueStore,
{
    let reopen = matches!(LOAD_RESOURCE_FORM.load(store), Ok(Some(true)));
    let form = page.element(ids::RESOURCE_FORM);

    if reopen {
        if let Some(form) = form {
            let button = page.require(ids::ADD_CONTENT_BUTTON)?;
            form.show();
            button.hide();
        }
        return Ok(());
    }

    if let Some(form) = form {
        form.hide();
    }
    LOAD_RESOURCE_FORM.clear(store)?;
    Ok(())
}
