//! Application state

use crate::session::{SavedSession, SessionError};
use rand::SeedableRng;
use skill_core::{
    roll_hit, CalcError, Calculation, CombatOverview, DamageEngine, DamageRange, Increment,
    InputField, InputForm, UpgradeSession, UpgradeTotals,
};
use skill_core::input::parse_field;
use std::path::PathBuf;
use thiserror::Error;

/// Maximum entries kept in the hit log
const HIT_LOG_LIMIT: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Calculator,
    Books,
    Tier,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Calculator, Tab::Books, Tab::Tier, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Calculator => "Calculator",
            Tab::Books => "Books",
            Tab::Tier => "Tier",
            Tab::Help => "Help",
        }
    }
}

/// Why a tier conversion produced no range
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TierError {
    #[error("Please fill in: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error(transparent)]
    Calc(#[from] CalcError),
}

/// Fields of the tier conversion form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierField {
    Min,
    Max,
    OldModifier,
    NewModifier,
}

impl TierField {
    pub fn all() -> &'static [TierField] {
        &[
            TierField::Min,
            TierField::Max,
            TierField::OldModifier,
            TierField::NewModifier,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TierField::Min => "Current Min Damage",
            TierField::Max => "Current Max Damage",
            TierField::OldModifier => "Current AP Modifier",
            TierField::NewModifier => "New AP Modifier",
        }
    }
}

/// Text of the tier conversion form
#[derive(Debug, Clone, Default)]
pub struct TierForm {
    pub min: String,
    pub max: String,
    pub old_modifier: String,
    pub new_modifier: String,
}

impl TierForm {
    pub fn get(&self, field: TierField) -> &str {
        match field {
            TierField::Min => &self.min,
            TierField::Max => &self.max,
            TierField::OldModifier => &self.old_modifier,
            TierField::NewModifier => &self.new_modifier,
        }
    }

    pub fn get_mut(&mut self, field: TierField) -> &mut String {
        match field {
            TierField::Min => &mut self.min,
            TierField::Max => &mut self.max,
            TierField::OldModifier => &mut self.old_modifier,
            TierField::NewModifier => &mut self.new_modifier,
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    pub engine: DamageEngine,
    // Calculator state
    pub form: InputForm,
    /// Index into `InputField::all()`; one past the end selects the Onrush toggle
    pub selected_field: usize,
    pub outcome: Option<Result<Calculation, CalcError>>,
    pub hit_log: Vec<String>,
    pub rng: rand::rngs::StdRng,
    // Books state
    pub session: UpgradeSession,
    pub selected_book: usize,
    // Tier state
    pub tier: TierForm,
    pub selected_tier_field: usize,
    pub tier_result: Option<Result<DamageRange, TierError>>,
    // Misc
    pub status: Option<String>,
    pub session_path: PathBuf,
}

impl App {
    pub fn new(engine: DamageEngine, session_path: PathBuf) -> Self {
        let session = engine.new_session();
        App {
            current_tab: Tab::Calculator,
            engine,
            form: InputForm::default(),
            selected_field: 0,
            outcome: None,
            hit_log: Vec::new(),
            rng: rand::rngs::StdRng::from_entropy(),
            session,
            selected_book: 0,
            tier: TierForm::default(),
            selected_tier_field: 0,
            tier_result: None,
            status: None,
            session_path,
        }
    }

    // === Tabs ===

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + 1) % tabs.len()];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + tabs.len() - 1) % tabs.len()];
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
    }

    // === Navigation ===

    /// Rows on the calculator tab: every field plus the Onrush toggle
    fn calculator_rows(&self) -> usize {
        InputField::all().len() + 1
    }

    pub fn selected_input(&self) -> Option<InputField> {
        InputField::all().get(self.selected_field).copied()
    }

    pub fn on_onrush_row(&self) -> bool {
        self.selected_field == InputField::all().len()
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Calculator => {
                let rows = self.calculator_rows();
                self.selected_field = (self.selected_field + rows - 1) % rows;
            }
            Tab::Books => {
                let rows = self.session.items().len().max(1);
                self.selected_book = (self.selected_book + rows - 1) % rows;
            }
            Tab::Tier => {
                let rows = TierField::all().len();
                self.selected_tier_field = (self.selected_tier_field + rows - 1) % rows;
            }
            Tab::Help => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Calculator => {
                self.selected_field = (self.selected_field + 1) % self.calculator_rows();
            }
            Tab::Books => {
                let rows = self.session.items().len().max(1);
                self.selected_book = (self.selected_book + 1) % rows;
            }
            Tab::Tier => {
                self.selected_tier_field = (self.selected_tier_field + 1) % TierField::all().len();
            }
            Tab::Help => {}
        }
    }

    pub fn on_left(&mut self) {
        if self.current_tab == Tab::Books {
            self.change_selected_book(-1);
        }
    }

    pub fn on_right(&mut self) {
        if self.current_tab == Tab::Books {
            self.change_selected_book(1);
        }
    }

    // === Text entry ===

    /// Text of the currently focused field, if any
    fn focused_text(&mut self) -> Option<&mut String> {
        match self.current_tab {
            Tab::Calculator => {
                let field = self.selected_input()?;
                Some(self.form.get_mut(field))
            }
            Tab::Tier => {
                let field = *TierField::all().get(self.selected_tier_field)?;
                Some(self.tier.get_mut(field))
            }
            Tab::Books | Tab::Help => None,
        }
    }

    /// Handle a typed character; returns false when the key was not consumed
    pub fn on_char(&mut self, c: char) -> bool {
        if self.current_tab == Tab::Books {
            return match c {
                '+' | '=' => {
                    self.change_selected_book(1);
                    true
                }
                '-' | '_' => {
                    self.change_selected_book(-1);
                    true
                }
                _ => false,
            };
        }

        if !(c.is_ascii_digit() || c == '.' || c == '-') {
            return false;
        }
        match self.focused_text() {
            Some(text) => {
                text.push(c);
                true
            }
            None => false,
        }
    }

    pub fn on_backspace(&mut self) {
        if let Some(text) = self.focused_text() {
            text.pop();
        }
    }

    pub fn clear_field(&mut self) {
        if let Some(text) = self.focused_text() {
            text.clear();
        }
    }

    pub fn on_space(&mut self) {
        if self.current_tab == Tab::Calculator && self.on_onrush_row() {
            self.form.onrush_active = !self.form.onrush_active;
        }
    }

    pub fn on_enter(&mut self) {
        match self.current_tab {
            Tab::Calculator => self.calculate(),
            Tab::Tier => self.convert_tier(),
            Tab::Books => self.change_selected_book(1),
            Tab::Help => {}
        }
    }

    // === Calculator ===

    pub fn upgrade_totals(&self) -> UpgradeTotals {
        self.engine.compute_upgrade_totals(self.session.items())
    }

    /// Live overview of whatever has been typed so far
    pub fn overview(&self) -> CombatOverview {
        self.engine
            .compute_combat_overview(&self.form.parse().overview_inputs())
    }

    pub fn calculate(&mut self) {
        let raw = self.form.parse();
        let outcome = self.engine.compute_damage(&raw, self.upgrade_totals());
        if let Err(e) = &outcome {
            tracing::info!(error = %e, "calculation failed");
        }
        self.outcome = Some(outcome);
    }

    /// Roll one hit from the last full result
    pub fn roll(&mut self) {
        let result = match &self.outcome {
            Some(Ok(Calculation::Full(result))) => result.clone(),
            _ => {
                self.status = Some("Calculate a full result before rolling hits".to_string());
                return;
            }
        };

        let hit = roll_hit(&result, &mut self.rng);
        let line = if hit.is_critical {
            format!("CRIT! {:.0}", hit.amount)
        } else {
            format!("Hit {:.0}", hit.amount)
        };
        self.hit_log.insert(0, line);
        self.hit_log.truncate(HIT_LOG_LIMIT);
    }

    // === Books ===

    pub fn change_selected_book(&mut self, delta: i64) {
        let id = match self.session.items().get(self.selected_book) {
            Some(item) => item.id.clone(),
            None => return,
        };

        match self.session.increment(&id, delta) {
            Ok(Increment::Applied { .. }) => self.status = None,
            Ok(Increment::Rejected {
                attempted_level,
                max_level,
            }) => {
                self.status = Some(format!(
                    "Level {} would exceed the Grandmaster cap of {}",
                    attempted_level, max_level
                ));
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    /// Drop the footer message so the key hints show again
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn reset_books(&mut self) {
        self.session.reset();
        self.status = Some("Books reset".to_string());
    }

    // === Tier ===

    pub fn convert_tier(&mut self) {
        let values: Vec<Option<f64>> = TierField::all()
            .iter()
            .map(|f| parse_field(self.tier.get(*f)))
            .collect();

        self.tier_result = match values.as_slice() {
            [Some(min), Some(max), Some(old), Some(new)] => Some(
                self.engine
                    .convert_tier(*min, *max, *old, *new)
                    .map_err(TierError::from),
            ),
            _ => {
                let missing = TierField::all()
                    .iter()
                    .zip(&values)
                    .filter(|(_, value)| value.is_none())
                    .map(|(field, _)| field.label())
                    .collect();
                Some(Err(TierError::MissingFields(missing)))
            }
        };
    }

    /// Copy the converted range into the calculator's base damage fields
    pub fn apply_tier(&mut self) {
        match &self.tier_result {
            Some(Ok(range)) => {
                self.form.set(InputField::BaseDamageMin, range.min.to_string());
                self.form.set(InputField::BaseDamageMax, range.max.to_string());
                self.status = Some(format!("Base damage set to {:.0}", range));
            }
            _ => self.status = Some("Convert a tier before applying it".to_string()),
        }
    }

    // === Persistence ===

    pub fn save_session(&mut self) {
        let saved = SavedSession::capture(&self.form, &self.session);
        self.status = Some(match saved.save(&self.session_path) {
            Ok(()) => format!("Saved session to {}", self.session_path.display()),
            Err(e) => format!("Save failed: {}", e),
        });
    }

    pub fn load_session(&mut self) {
        self.status = Some(match self.try_load_session() {
            Ok(()) => format!("Loaded session from {}", self.session_path.display()),
            Err(e) => format!("Load failed: {}", e),
        });
    }

    fn try_load_session(&mut self) -> Result<(), SessionError> {
        let saved = SavedSession::load(&self.session_path)?;
        let mut session = self.engine.new_session();
        saved.restore_books(&mut session)?;
        self.form = saved.form;
        self.session = session;
        self.outcome = None;
        Ok(())
    }
}
