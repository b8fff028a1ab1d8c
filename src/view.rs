//! Handlers behind the dashboard's buttons, links and checkboxes.
//!
//! Each handler looks up every element it touches, and loads every stored
//! entry it rewrites, before changing any of them. A page missing one of its
//! elements, or a corrupt entry, leaves both page and store as they were.

use std::time::Duration;

use log::debug;
use strum::IntoEnumIterator;

use crate::{
    error::ViewError,
    model::{Id, SectionColour, SectionStatus, Tab},
    page::{Node, Page, SELECTED, ids},
    store::{
        KeyValueStore,
        entry::{self, CURRENT_NAV, LOAD_RESOURCE_FORM, OPEN_COURSES},
    },
};

/// Whether a course's section list ended up open or closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    Expanded,
    Collapsed,
}

/// Input clearing that has to wait until the section form has finished
/// opening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingClear {
    pub course: Id,
    pub delay: Duration,
}

impl PendingClear {
    /// Clears the form's inputs. Inputs that disappeared in the meantime are
    /// skipped.
    pub fn apply<P: Page>(&self, page: &P) {
        for id in [
            ids::section_number_input(self.course),
            ids::section_title_input(self.course),
        ] {
            if let Some(input) = page.element(&id) {
                input.set_value("");
            }
        }
    }
}

pub struct ViewController<P, S> {
    page: P,
    store: S,
}

impl<P, S> ViewController<P, S>
where
    P: Page,
    S: KeyValueStore,
{
    pub fn new(page: P, store: S) -> Self {
        Self { page, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Handles a click on a nav link or a change of the select menu.
    pub fn handle_nav(&mut self, source: &P::Node) -> Result<Tab, ViewError> {
        let label = if source.tag_name() == "select" {
            source.value().unwrap_or_default()
        } else {
            source.inner_html()
        };
        let tab = Tab::from_label(&label).ok_or(ViewError::UnknownTab(label))?;
        self.select_tab(tab)?;
        Ok(tab)
    }

    pub fn select_tab(&mut self, tab: Tab) -> Result<(), ViewError> {
        let form = self.page.require(ids::RESOURCE_FORM)?;
        let radios = self.resource_type_radios()?;
        let button = self.page.require(ids::ADD_CONTENT_BUTTON)?;
        let nav = self.page.require(ids::NAV)?;
        let select = self.page.require(ids::TAB_SELECT)?;
        let panels = self.panels()?;

        form.hide();
        for radio in radios {
            radio.set_checked(false);
        }
        button.set_visible(tab.accepts_content());
        highlight_nav(&nav, tab);
        select.set_value(tab.panel_id());
        show_only(&panels, Some(tab));

        CURRENT_NAV.save(&mut self.store, &tab)?;
        debug!("selected tab {tab}");
        Ok(())
    }

    /// The tab marked selected in the nav bar. This is what the page shows,
    /// which is not necessarily what `currentNav` holds.
    pub fn selected_tab(&self) -> Result<Option<Tab>, ViewError> {
        let nav = self.page.require(ids::NAV)?;
        Ok(nav
            .children()
            .into_iter()
            .find(|link| link.has_class(SELECTED))
            .and_then(|link| Tab::from_label(&link.inner_html())))
    }

    /// Flips a course's section list between open and closed.
    ///
    /// Closing drops the course from the open set. Opening leaves the set
    /// alone; only [`Self::prepare_section_form`] adds courses to it.
    pub fn toggle_sections(&mut self, course: Id) -> Result<Expansion, ViewError> {
        let down = self.page.require(&ids::down_arrow(course))?;
        let up = self.page.require(&ids::up_arrow(course))?;
        let sections = self.page.require(&ids::section_list(course))?;

        if down.is_hidden() {
            let open = OPEN_COURSES.load(&self.store)?;
            down.show();
            up.hide();
            sections.hide();
            if let Some(mut courses) = open {
                let before = courses.len();
                courses.retain(|&c| c != course);
                if courses.len() != before {
                    OPEN_COURSES.save(&mut self.store, &courses)?;
                }
            }
            Ok(Expansion::Collapsed)
        } else {
            down.hide();
            up.show();
            sections.show();
            Ok(Expansion::Expanded)
        }
    }

    /// Recomputes a section's colour from its two checkboxes and saves it.
    pub fn recolour_section(
        &mut self,
        course: Id,
        section: Id,
    ) -> Result<SectionStatus, ViewError> {
        let cards_made = self
            .page
            .require(&ids::cards_made_checkbox(course, section))?;
        let complete = self.page.require(&ids::complete_checkbox(course, section))?;
        let card = self.page.require(&ids::section(course, section))?;

        let status = SectionStatus::from_checks(cards_made.is_checked(), complete.is_checked());
        let saved_entry = entry::course_sections(course);
        let mut saved = saved_entry.load(&self.store)?.unwrap_or_default();

        for other in SectionStatus::iter().filter(|s| *s != status) {
            card.remove_class(other.class());
        }
        card.add_class(status.class());

        let changed = match saved.iter_mut().find(|s| s.id == section) {
            Some(existing) if existing.colour == status => false,
            Some(existing) => {
                existing.colour = status;
                true
            }
            None => {
                saved.push(SectionColour {
                    id: section,
                    colour: status,
                });
                true
            }
        };
        if changed {
            saved_entry.save(&mut self.store, &saved)?;
        }
        debug!("section {section} of course {course} is now {status}");
        Ok(status)
    }

    /// Replaces the content panels with the add-resource form.
    pub fn open_resource_form(&mut self) -> Result<(), ViewError> {
        let panels: Vec<_> = self
            .panels()?
            .into_iter()
            .filter(|(tab, _)| *tab != Tab::Statistics)
            .collect();
        let button = self.page.require(ids::ADD_CONTENT_BUTTON)?;
        let form = self.page.require(ids::RESOURCE_FORM)?;

        for (_, panel) in &panels {
            panel.hide();
        }
        button.hide();
        form.show();
        self.clear_resource_inputs();
        Ok(())
    }

    /// Hides the add-resource form and brings back the panel of the tab
    /// the nav bar shows as selected. `currentNav` is not consulted.
    ///
    /// With no nav link selected every panel stays hidden and the add
    /// button is shown.
    pub fn close_resource_form(&mut self) -> Result<(), ViewError> {
        let form = self.page.require(ids::RESOURCE_FORM)?;
        let button = self.page.require(ids::ADD_CONTENT_BUTTON)?;
        let panels = self.panels()?;
        let tab = self.selected_tab()?;

        form.hide();
        button.set_visible(tab.is_none_or(Tab::accepts_content));
        show_only(&panels, tab);
        if tab.is_none() {
            debug!("no nav link selected, hiding every panel");
        }
        Ok(())
    }

    /// Remembers whether the add-resource form should reopen on the next
    /// load.
    pub fn set_resource_form_state(&mut self, open: bool) -> Result<(), ViewError> {
        LOAD_RESOURCE_FORM.save(&mut self.store, &open)?;
        Ok(())
    }

    pub fn open_section_form(&mut self, course: Id) -> Result<(), ViewError> {
        let [form, add, close] = self.section_form_parts(course)?;
        form.show();
        add.hide();
        close.show();
        Ok(())
    }

    pub fn close_section_form(&mut self, course: Id) -> Result<(), ViewError> {
        let [form, add, close] = self.section_form_parts(course)?;
        form.hide();
        add.show();
        close.hide();
        Ok(())
    }

    /// Keeps the course expanded across the reload that adding a section
    /// causes, and returns the input clearing to run once `delay` has
    /// passed.
    pub fn prepare_section_form(
        &mut self,
        course: Id,
        delay: Duration,
    ) -> Result<PendingClear, ViewError> {
        self.page.require(&ids::section_number_input(course))?;
        self.page.require(&ids::section_title_input(course))?;

        OPEN_COURSES.update(&mut self.store, |courses| {
            if courses.contains(&course) {
                return false;
            }
            courses.push(course);
            true
        })?;

        Ok(PendingClear { course, delay })
    }

    /// Removes the flashed message box.
    pub fn dismiss_message(&mut self) -> Result<(), ViewError> {
        self.page.require(ids::FLASH_MESSAGE)?.remove();
        Ok(())
    }

    fn clear_resource_inputs(&self) {
        let name = self.page.element(ids::RESOURCE_NAME);
        let url = self.page.element(ids::RESOURCE_URL);
        if let (Some(name), Some(url)) = (name, url) {
            name.set_value("");
            url.set_value("");
        }
    }

    fn resource_type_radios(&self) -> Result<Vec<P::Node>, ViewError> {
        (0..ids::RESOURCE_TYPE_COUNT)
            .map(|i| self.page.require(&ids::resource_type(i)))
            .collect()
    }

    fn panels(&self) -> Result<Vec<(Tab, P::Node)>, ViewError> {
        Tab::iter()
            .map(|tab| Ok((tab, self.page.require(tab.panel_id())?)))
            .collect()
    }

    fn section_form_parts(&self, course: Id) -> Result<[P::Node; 3], ViewError> {
        Ok([
            self.page.require(&ids::section_form(course))?,
            self.page.require(&ids::section_add_button(course))?,
            self.page.require(&ids::section_close_button(course))?,
        ])
    }
}

/// Marks the nav link labelled `tab` as the only selected one.
pub(crate) fn highlight_nav<N: Node>(nav: &N, tab: Tab) {
    for link in nav.children() {
        if Tab::from_label(&link.inner_html()) == Some(tab) {
            link.add_class(SELECTED);
        } else {
            link.remove_class(SELECTED);
        }
    }
}

/// Shows the panel of `tab` and hides the others. `None` hides them all.
pub(crate) fn show_only<N: Node>(panels: &[(Tab, N)], tab: Option<Tab>) {
    for (panel_tab, panel) in panels {
        panel.set_visible(Some(*panel_tab) == tab);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        page::{HIDDEN, MemoryNode, MemoryPage},
        store::MemoryStore,
    };

    const COURSE: Id = Id(5);
    const SECTION: Id = Id(2);

    /// The dashboard as first rendered: statistics selected, every other
    /// panel hidden, one course with one section.
    fn dashboard() -> MemoryPage {
        let page = MemoryPage::new();

        let nav = page.insert(ids::NAV, "nav");
        for tab in Tab::iter() {
            let link = nav
                .insert_child(&tab.nav_id(), "a")
                .with_html(&capitalized(tab.panel_id()));
            if tab == Tab::Statistics {
                link.add_class(SELECTED);
            }
        }
        page.insert(ids::TAB_SELECT, "select").with_value("statistics");
        for tab in Tab::iter() {
            let panel = page.insert(tab.panel_id(), "section");
            if tab != Tab::Statistics {
                panel.add_class(HIDDEN);
            }
        }
        page.insert_hidden(ids::ADD_CONTENT_BUTTON);
        page.insert_hidden(ids::RESOURCE_FORM);
        page.insert(ids::RESOURCE_NAME, "input").with_value("draft");
        page.insert(ids::RESOURCE_URL, "input").with_value("https://draft");
        for i in 0..ids::RESOURCE_TYPE_COUNT {
            page.insert(&ids::resource_type(i), "input");
        }

        page.insert(&ids::down_arrow(COURSE), "span");
        page.insert_hidden(&ids::up_arrow(COURSE));
        page.insert_hidden(&ids::section_list(COURSE));
        page.insert_hidden(&ids::section_form(COURSE));
        page.insert(&ids::section_add_button(COURSE), "button");
        page.insert_hidden(&ids::section_close_button(COURSE));
        page.insert(&ids::section_number_input(COURSE), "input").with_value("3");
        page.insert(&ids::section_title_input(COURSE), "input").with_value("Intro");
        page.insert(&ids::section(COURSE, SECTION), "div");
        page.insert(&ids::cards_made_checkbox(COURSE, SECTION), "input");
        page.insert(&ids::complete_checkbox(COURSE, SECTION), "input");

        page
    }

    fn capitalized(s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    fn controller(page: &MemoryPage) -> ViewController<MemoryPage, MemoryStore> {
        ViewController::new(page.clone(), MemoryStore::new())
    }

    fn visible_panels(page: &MemoryPage) -> Vec<Tab> {
        Tab::iter().filter(|t| page.is_visible(t.panel_id())).collect()
    }

    fn selected_links(page: &MemoryPage) -> Vec<Tab> {
        Tab::iter()
            .filter(|t| page.has_class(&t.nav_id(), SELECTED))
            .collect()
    }

    fn set_checks(page: &MemoryPage, cards_made: bool, complete: bool) {
        page.element(&ids::cards_made_checkbox(COURSE, SECTION))
            .unwrap()
            .set_checked(cards_made);
        page.element(&ids::complete_checkbox(COURSE, SECTION))
            .unwrap()
            .set_checked(complete);
    }

    fn link(page: &MemoryPage, tab: Tab) -> MemoryNode {
        page.element(&tab.nav_id()).unwrap()
    }

    #[test]
    fn selecting_a_tab_shows_only_its_panel() {
        let page = dashboard();
        let mut view = controller(&page);

        for tab in Tab::iter() {
            view.select_tab(tab).unwrap();
            assert_eq!(visible_panels(&page), vec![tab]);
            assert_eq!(selected_links(&page), vec![tab]);
            assert_eq!(
                page.element(ids::TAB_SELECT).unwrap().value().as_deref(),
                Some(tab.panel_id())
            );
            assert_eq!(
                view.store().raw("currentNav"),
                Some(tab.panel_id())
            );
        }
    }

    #[test]
    fn add_button_hidden_only_for_statistics() {
        let page = dashboard();
        let mut view = controller(&page);

        for tab in Tab::iter() {
            view.select_tab(tab).unwrap();
            assert_eq!(
                page.is_visible(ids::ADD_CONTENT_BUTTON),
                tab != Tab::Statistics,
                "{tab}"
            );
        }
    }

    #[test]
    fn nav_link_and_select_lead_to_same_state() {
        let from_link = dashboard();
        let mut view = controller(&from_link);
        assert_eq!(view.handle_nav(&link(&from_link, Tab::Videos)).unwrap(), Tab::Videos);

        let from_select = dashboard();
        let select = from_select.element(ids::TAB_SELECT).unwrap();
        select.set_value("videos");
        let mut view = controller(&from_select);
        assert_eq!(view.handle_nav(&select).unwrap(), Tab::Videos);

        assert_eq!(from_link.snapshot(), from_select.snapshot());
    }

    #[test]
    fn tab_change_resets_resource_form() {
        let page = dashboard();
        let mut view = controller(&page);
        view.open_resource_form().unwrap();
        page.element(&ids::resource_type(1)).unwrap().set_checked(true);

        view.handle_nav(&link(&page, Tab::Articles)).unwrap();

        assert!(!page.is_visible(ids::RESOURCE_FORM));
        assert!((0..ids::RESOURCE_TYPE_COUNT)
            .all(|i| !page.element(&ids::resource_type(i)).unwrap().is_checked()));
    }

    #[test]
    fn unknown_nav_label_changes_nothing() {
        let page = dashboard();
        let settings = page.insert("nav-settings", "a").with_html("Settings");
        let before = page.snapshot();
        let mut view = controller(&page);

        assert!(matches!(
            view.handle_nav(&settings),
            Err(ViewError::UnknownTab(label)) if label == "Settings"
        ));
        assert_eq!(page.snapshot(), before);
        assert_eq!(view.store().raw("currentNav"), None);
    }

    #[test]
    fn missing_element_leaves_page_untouched() {
        let page = dashboard();
        page.element("documentation").unwrap().remove();
        let before = page.snapshot();
        let mut view = controller(&page);

        assert!(matches!(
            view.select_tab(Tab::Courses),
            Err(ViewError::MissingElement(id)) if id == "documentation"
        ));
        assert_eq!(page.snapshot(), before);
        assert_eq!(view.store().len().unwrap(), 0);
    }

    #[test]
    fn toggling_twice_restores_visibility() {
        let page = dashboard();
        let before = page.snapshot();
        let mut view = controller(&page);

        assert_eq!(view.toggle_sections(COURSE).unwrap(), Expansion::Expanded);
        assert!(page.is_visible(&ids::section_list(COURSE)));
        assert!(page.is_visible(&ids::up_arrow(COURSE)));
        assert!(!page.is_visible(&ids::down_arrow(COURSE)));

        assert_eq!(view.toggle_sections(COURSE).unwrap(), Expansion::Collapsed);
        assert_eq!(page.snapshot(), before);
    }

    #[test]
    fn collapsing_forgets_course_but_expanding_does_not_remember_it() {
        let page = dashboard();
        let store = MemoryStore::with_entries([("coursesWithOpenSections", "[5,9]")]);
        let mut view = ViewController::new(page.clone(), store);

        view.toggle_sections(COURSE).unwrap();
        assert_eq!(view.store().raw("coursesWithOpenSections"), Some("[5,9]"));

        view.toggle_sections(COURSE).unwrap();
        assert_eq!(view.store().raw("coursesWithOpenSections"), Some("[9]"));

        view.toggle_sections(COURSE).unwrap();
        assert_eq!(view.store().raw("coursesWithOpenSections"), Some("[9]"));
    }

    #[test]
    fn collapsing_without_open_set_writes_nothing() {
        let page = dashboard();
        let mut view = controller(&page);
        view.toggle_sections(COURSE).unwrap();
        view.toggle_sections(COURSE).unwrap();
        assert_eq!(view.store().len().unwrap(), 0);
    }

    #[test]
    fn recolouring_follows_checkboxes() {
        let page = dashboard();
        let mut view = controller(&page);
        let card = ids::section(COURSE, SECTION);

        let cases = [
            (false, false, SectionStatus::ToDo),
            (true, false, SectionStatus::InProgress),
            (false, true, SectionStatus::InProgress),
            (true, true, SectionStatus::Completed),
        ];
        for (cards_made, complete, expected) in cases {
            set_checks(&page, cards_made, complete);
            assert_eq!(view.recolour_section(COURSE, SECTION).unwrap(), expected);

            let colours: Vec<_> = page
                .element(&card)
                .unwrap()
                .class_names()
                .into_iter()
                .filter(|c| c.starts_with(SectionStatus::CLASS_PREFIX))
                .collect();
            assert_eq!(colours, vec![expected.class().to_string()]);

            let saved = entry::course_sections(COURSE).load(view.store()).unwrap();
            assert_eq!(
                saved,
                Some(vec![SectionColour {
                    id: SECTION,
                    colour: expected
                }])
            );
        }
    }

    #[test]
    fn recolouring_is_idempotent() {
        let page = dashboard();
        let mut view = controller(&page);
        set_checks(&page, true, false);

        view.recolour_section(COURSE, SECTION).unwrap();
        let page_once = page.snapshot();
        let store_once = view.store().clone();

        view.recolour_section(COURSE, SECTION).unwrap();
        assert_eq!(page.snapshot(), page_once);
        assert_eq!(view.store(), &store_once);
    }

    #[test]
    fn recolouring_keeps_other_sections() {
        let page = dashboard();
        page.insert(&ids::section(COURSE, Id(3)), "div");
        let store = MemoryStore::with_entries([(
            "course-5-sections",
            r#"[{"id":3,"colour":"bg-lime-400"}]"#,
        )]);
        let mut view = ViewController::new(page.clone(), store);
        set_checks(&page, true, true);

        view.recolour_section(COURSE, SECTION).unwrap();

        assert_eq!(
            view.store().raw("course-5-sections"),
            Some(r#"[{"id":3,"colour":"bg-lime-400"},{"id":2,"colour":"bg-lime-400"}]"#)
        );
    }

    #[test]
    fn resource_form_replaces_content() {
        let page = dashboard();
        let mut view = controller(&page);
        view.select_tab(Tab::Courses).unwrap();

        view.open_resource_form().unwrap();
        assert!(page.is_visible(ids::RESOURCE_FORM));
        assert!(!page.is_visible(ids::ADD_CONTENT_BUTTON));
        assert!(visible_panels(&page).is_empty());
        assert_eq!(
            page.element(ids::RESOURCE_NAME).unwrap().value().as_deref(),
            Some("")
        );
        assert_eq!(
            page.element(ids::RESOURCE_URL).unwrap().value().as_deref(),
            Some("")
        );

        view.close_resource_form().unwrap();
        assert!(!page.is_visible(ids::RESOURCE_FORM));
        assert!(page.is_visible(ids::ADD_CONTENT_BUTTON));
        assert_eq!(visible_panels(&page), vec![Tab::Courses]);
    }

    #[test]
    fn closing_resource_form_trusts_nav_over_store() {
        let page = dashboard();
        let store = MemoryStore::with_entries([("currentNav", "videos")]);
        let mut view = ViewController::new(page.clone(), store);

        view.open_resource_form().unwrap();
        view.close_resource_form().unwrap();

        assert_eq!(visible_panels(&page), vec![Tab::Statistics]);
        assert!(!page.is_visible(ids::ADD_CONTENT_BUTTON));
    }

    #[test]
    fn closing_resource_form_without_selection_hides_all_panels() {
        let page = dashboard();
        link(&page, Tab::Statistics).remove_class(SELECTED);
        let store = MemoryStore::with_entries([("currentNav", "articles")]);
        let mut view = ViewController::new(page.clone(), store);

        view.open_resource_form().unwrap();
        view.close_resource_form().unwrap();

        assert!(visible_panels(&page).is_empty());
        assert!(page.is_visible(ids::ADD_CONTENT_BUTTON));
        assert!(!page.is_visible(ids::RESOURCE_FORM));
    }

    #[test]
    fn corrupt_section_colours_leave_page_untouched() {
        let page = dashboard();
        let store = MemoryStore::with_entries([("course-5-sections", "[{")]);
        let mut view = ViewController::new(page.clone(), store);
        set_checks(&page, true, true);
        let before = page.snapshot();

        assert!(matches!(
            view.recolour_section(COURSE, SECTION),
            Err(ViewError::Store(_))
        ));
        assert_eq!(page.snapshot(), before);
        assert_eq!(view.store().raw("course-5-sections"), Some("[{"));
    }

    #[test]
    fn corrupt_open_set_leaves_page_untouched_on_collapse() {
        let page = dashboard();
        let store = MemoryStore::with_entries([("coursesWithOpenSections", "[5")]);
        let mut view = ViewController::new(page.clone(), store);
        view.toggle_sections(COURSE).unwrap();
        let expanded = page.snapshot();

        assert!(matches!(
            view.toggle_sections(COURSE),
            Err(ViewError::Store(_))
        ));
        assert_eq!(page.snapshot(), expanded);
    }

    #[test]
    fn resource_form_state_is_persisted() {
        let page = dashboard();
        let mut view = controller(&page);
        view.set_resource_form_state(true).unwrap();
        assert_eq!(view.store().raw("loadResourceForm"), Some("true"));
        view.set_resource_form_state(false).unwrap();
        assert_eq!(view.store().raw("loadResourceForm"), Some("false"));
    }

    #[test]
    fn section_form_open_and_close() {
        let page = dashboard();
        let before = page.snapshot();
        let mut view = controller(&page);

        view.open_section_form(COURSE).unwrap();
        assert!(page.is_visible(&ids::section_form(COURSE)));
        assert!(!page.is_visible(&ids::section_add_button(COURSE)));
        assert!(page.is_visible(&ids::section_close_button(COURSE)));

        view.close_section_form(COURSE).unwrap();
        assert_eq!(page.snapshot(), before);
        assert_eq!(view.store().len().unwrap(), 0);
    }

    #[test]
    fn preparing_section_form_records_course_once() {
        let page = dashboard();
        let mut view = controller(&page);
        let delay = Duration::from_millis(500);

        let pending = view.prepare_section_form(COURSE, delay).unwrap();
        view.prepare_section_form(COURSE, delay).unwrap();
        assert_eq!(view.store().raw("coursesWithOpenSections"), Some("[5]"));
        assert_eq!(pending, PendingClear { course: COURSE, delay });

        assert_eq!(
            page.element(&ids::section_title_input(COURSE)).unwrap().value().as_deref(),
            Some("Intro")
        );
        pending.apply(&page);
        for id in [ids::section_number_input(COURSE), ids::section_title_input(COURSE)] {
            assert_eq!(page.element(&id).unwrap().value().as_deref(), Some(""));
        }
    }

    #[test]
    fn pending_clear_tolerates_removed_inputs() {
        let page = dashboard();
        let mut view = controller(&page);
        let pending = view
            .prepare_section_form(COURSE, Duration::from_millis(500))
            .unwrap();
        page.element(&ids::section_number_input(COURSE)).unwrap().remove();

        pending.apply(&page);
        assert_eq!(
            page.element(&ids::section_title_input(COURSE)).unwrap().value().as_deref(),
            Some("")
        );
    }

    #[test]
    fn dismissing_message_removes_it() {
        let page = dashboard();
        page.insert(ids::FLASH_MESSAGE, "div");
        let mut view = controller(&page);

        view.dismiss_message().unwrap();
        assert!(page.element(ids::FLASH_MESSAGE).is_none());
        assert!(matches!(
            view.dismiss_message(),
            Err(ViewError::MissingElement(_))
        ));
    }
}
