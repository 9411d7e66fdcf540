//! Single-level and cascading menus. The menu tree is static and data-driven:
//! it is declared once at startup from [`MenuEntry`] values, so adding a new
//! top- or sub-level entry touches only the definition and a dispatch arm in
//! a handler, never this machinery.

use anyhow::Result;

use super::prompt::Prompter;

/// One top-level entry of the cascading menu definition: a display name plus
/// its (possibly empty) list of sub-choices.
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub name: String,
    pub sub_choices: Vec<String>,
}

impl MenuEntry {
    pub fn new(name: impl Into<String>, sub_choices: Vec<String>) -> Self {
        Self {
            name: name.into(),
            sub_choices,
        }
    }
}

/// A titled single-select list. `prompt` blocks until the operator picks an
/// entry and returns the selected label.
#[derive(Debug)]
pub struct Menu {
    title: String,
    message: String,
    choices: Vec<String>,
}

impl Menu {
    pub fn new(choices: Vec<String>, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            choices,
        }
    }

    pub fn prompt(&self, ui: &mut dyn Prompter) -> Result<String> {
        ui.banner(&self.title)?;
        let index = ui.select(&self.message, &self.choices)?;
        Ok(self.choices[index].clone())
    }
}

/// The pair of labels a full menu pass produces. `sub` is empty when the main
/// entry has no sub-menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub main: String,
    pub sub: String,
}

/// A top-level menu composed with per-choice sub-menus. Sub-menus exist only
/// for entries whose definition listed sub-choices.
pub struct CascadingMenu {
    main: Menu,
    subs: Vec<(String, Menu)>,
}

impl CascadingMenu {
    pub fn new(entries: Vec<MenuEntry>, title: &str) -> Self {
        let names = entries.iter().map(|entry| entry.name.clone()).collect();
        let main = Menu::new(names, title, "What would you like to do?");

        let subs = entries
            .into_iter()
            .filter(|entry| !entry.sub_choices.is_empty())
            .map(|entry| {
                let message = format!("What would you like to {}?", entry.name.to_lowercase());
                let menu = Menu::new(entry.sub_choices, entry.name.clone(), message);
                (entry.name, menu)
            })
            .collect();

        Self { main, subs }
    }

    /// Show the top-level menu, then the matching sub-menu if one exists.
    pub fn prompt(&self, ui: &mut dyn Prompter) -> Result<Selection> {
        let main = self.main.prompt(ui)?;
        match self.subs.iter().find(|(name, _)| *name == main) {
            Some((_, sub_menu)) => {
                let sub = sub_menu.prompt(ui)?;
                Ok(Selection { main, sub })
            }
            None => Ok(Selection {
                main,
                sub: String::new(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::prompt::ScriptedPrompter;

    fn sample_menu() -> CascadingMenu {
        let entries = vec![
            MenuEntry::new("View", vec!["A".to_string(), "B".to_string()]),
            MenuEntry::new("Exit", vec![]),
        ];
        CascadingMenu::new(entries, "Sample")
    }

    #[test]
    fn entry_without_sub_choices_skips_the_sub_menu() {
        let menu = sample_menu();
        let mut ui = ScriptedPrompter::new([1]);
        let selection = menu.prompt(&mut ui).unwrap();
        assert_eq!(selection.main, "Exit");
        assert_eq!(selection.sub, "");
        assert_eq!(ui.select_calls, 1);
    }

    #[test]
    fn entry_with_sub_choices_prompts_twice() {
        let menu = sample_menu();
        let mut ui = ScriptedPrompter::new([0, 1]);
        let selection = menu.prompt(&mut ui).unwrap();
        assert_eq!(selection.main, "View");
        assert_eq!(selection.sub, "B");
        assert_eq!(ui.select_calls, 2);
    }

    #[test]
    fn single_menu_returns_the_selected_label() {
        let menu = Menu::new(
            vec!["First".to_string(), "Second".to_string()],
            "Pick",
            "Which one?",
        );
        let mut ui = ScriptedPrompter::new([1]);
        assert_eq!(menu.prompt(&mut ui).unwrap(), "Second");
    }
}
