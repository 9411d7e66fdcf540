//! Gathers operator input for one named interaction: a banner title followed
//! by an ordered series of questions. Foreign keys are always picked from a
//! constrained list of existing rows, never typed in by hand, which removes a
//! whole class of "referenced row does not exist" failures before any query
//! is issued.

use anyhow::Result;
use rust_decimal::Decimal;

use super::prompt::Prompter;

/// A selectable row: the label shown in the list plus the identifier handed
/// back to the caller.
#[derive(Debug, Clone)]
pub struct Choice {
    pub id: i32,
    pub label: String,
}

/// Collects answers for a single titled interaction.
pub struct Collector<'a> {
    ui: &'a mut dyn Prompter,
}

impl<'a> Collector<'a> {
    /// Show the section banner and start collecting.
    pub fn begin(ui: &'a mut dyn Prompter, title: &str) -> Result<Self> {
        ui.banner(title)?;
        Ok(Self { ui })
    }

    /// One line of free text.
    pub fn text(&mut self, message: &str) -> Result<String> {
        self.ui.input(message)
    }

    /// A free-text amount parsed into a [`Decimal`]. Malformed input is
    /// reported with guidance and yields `None`, letting the caller abort the
    /// action and return to the menu.
    pub fn amount(&mut self, message: &str) -> Result<Option<Decimal>> {
        let raw = self.ui.input(message)?;
        match raw.trim().parse::<Decimal>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                self.ui
                    .show(&format!("'{raw}' should be a number, like 55000 or 55000.50."));
                Ok(None)
            }
        }
    }

    /// Pick one row out of a constrained list.
    pub fn pick(&mut self, message: &str, choices: &[Choice]) -> Result<i32> {
        let labels: Vec<String> = choices.iter().map(|choice| choice.label.clone()).collect();
        let index = self.ui.select(message, &labels)?;
        Ok(choices[index].id)
    }

    /// Pick one row or "None". The explicit "None" entry heads the list so a
    /// nullable reference (an employee without a manager) is a deliberate
    /// selection rather than an omission.
    pub fn pick_optional(&mut self, message: &str, choices: &[Choice]) -> Result<Option<i32>> {
        let mut labels = vec!["None".to_string()];
        labels.extend(choices.iter().map(|choice| choice.label.clone()));
        let index = self.ui.select(message, &labels)?;
        if index == 0 {
            Ok(None)
        } else {
            Ok(Some(choices[index - 1].id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::prompt::ScriptedPrompter;

    fn choices() -> Vec<Choice> {
        vec![
            Choice {
                id: 7,
                label: "Engineering".to_string(),
            },
            Choice {
                id: 9,
                label: "Finance".to_string(),
            },
        ]
    }

    #[test]
    fn pick_returns_the_id_behind_the_label() {
        let mut ui = ScriptedPrompter::new([1]);
        let mut form = Collector::begin(&mut ui, "Test").unwrap();
        assert_eq!(form.pick("Choose:", &choices()).unwrap(), 9);
    }

    #[test]
    fn pick_optional_maps_the_first_entry_to_none() {
        let mut ui = ScriptedPrompter::new([0]);
        let mut form = Collector::begin(&mut ui, "Test").unwrap();
        assert_eq!(form.pick_optional("Choose:", &choices()).unwrap(), None);
    }

    #[test]
    fn pick_optional_offsets_past_the_none_entry() {
        let mut ui = ScriptedPrompter::new([2]);
        let mut form = Collector::begin(&mut ui, "Test").unwrap();
        assert_eq!(form.pick_optional("Choose:", &choices()).unwrap(), Some(9));
    }

    #[test]
    fn amount_parses_plain_and_fractional_values() {
        let mut ui =
            ScriptedPrompter::new([]).with_inputs(["55000.50".to_string(), "120000".to_string()]);
        let mut form = Collector::begin(&mut ui, "Test").unwrap();
        assert_eq!(
            form.amount("Salary:").unwrap(),
            Some(Decimal::new(5500050, 2))
        );
        assert_eq!(form.amount("Salary:").unwrap(), Some(Decimal::from(120000)));
    }

    #[test]
    fn malformed_amount_reports_guidance() {
        let mut ui = ScriptedPrompter::new([]).with_inputs(["lots".to_string()]);
        let mut form = Collector::begin(&mut ui, "Test").unwrap();
        assert_eq!(form.amount("Salary:").unwrap(), None);
        assert!(ui.shown[0].contains("should be a number"));
    }
}
