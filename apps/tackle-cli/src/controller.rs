//! # Menu Controller
//!
//! Drives the [`MenuState`] machine from console input.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MainMenu ── "1" ──► RecordHire                                         │
//! │     ▲                  │ name, phone, house, postcode, card             │
//! │     │                  │ item lines (blank line ends)                   │
//! │     │                  │ nights, returned on time                       │
//! │     │                  │ ──► HireLedger::record ──► summary             │
//! │     │                  │ "Add another hire (y/n)?"  (y loops)           │
//! │     ├──────────────────┘                                                │
//! │     │                                                                   │
//! │     ├── "2" ──► ShowReport ──► EarningsReport                           │
//! │     │                                                                   │
//! │     └── "3" / end of input ──► Terminated ──► "Goodbye!"                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing reaches the ledger until every field of a hire has been accepted.

use std::convert::Infallible;
use std::io::{BufRead, Write};

use tackle_core::catalog::catalog_codes;
use tackle_core::ingest::parse_item_entry;
use tackle_core::menu::MenuState;
use tackle_core::report::EarningsReport;
use tackle_core::validation::{
    normalise_postcode, parse_menu_selection, parse_nights, parse_yes_no, validate_card,
    validate_phone,
};
use tackle_core::{CustomerInfo, HireLedger, HireRecord, HireRequest, LineItem};
use tracing::{debug, info, warn};

use crate::config::ReportFormat;
use crate::console::Console;
use crate::error::AppResult;

const MAIN_MENU: &str = "\n=== Main Menu ===\n\
1) Enter details of customer and equipment hired\n\
2) Create report\n\
3) Exit";

const PROMPT_SELECT_OPTION: &str = "Select an option (1-3): ";

const CUSTOMER_INSTRUCTIONS: &str =
    "\nEnter customer details (leave the name blank to return to the menu).";

const ITEM_INSTRUCTIONS: &str = "\nEnter item lines (one per line), then press ENTER on a blank line to finish.\n\
Format: CODE, quantity   e.g.,  DCH, 2";

/// Result of collecting one hire from the console.
enum HireEntry {
    Ready(HireRequest),
    Cancelled,
    InputClosed,
}

/// What the hire loop ended with.
enum Flow {
    Continue,
    InputClosed,
}

/// The interactive shop session.
pub struct Shop<R, W> {
    console: Console<R, W>,
    ledger: HireLedger,
    format: ReportFormat,
    state: MenuState,
}

impl<R: BufRead, W: Write> Shop<R, W> {
    pub fn new(console: Console<R, W>, ledger: HireLedger, format: ReportFormat) -> Self {
        Shop {
            console,
            ledger,
            format,
            state: MenuState::default(),
        }
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(&mut self) -> AppResult<()> {
        info!(existing_hires = self.ledger.len(), "Menu session started");

        while !self.state.is_terminated() {
            debug!(state = ?self.state, "Menu state");
            match self.state {
                MenuState::MainMenu => self.main_menu()?,
                MenuState::RecordHire => {
                    self.state = match self.record_hires()? {
                        Flow::Continue => self.state.finish(),
                        Flow::InputClosed => MenuState::Terminated,
                    };
                }
                MenuState::ShowReport => {
                    self.show_report()?;
                    self.state = self.state.finish();
                }
                MenuState::Terminated => {}
            }
        }

        self.console.say("Goodbye!")?;
        info!(hires = self.ledger.len(), "Menu session ended");
        Ok(())
    }

    /// The ledger as it stands.
    pub fn ledger(&self) -> &HireLedger {
        &self.ledger
    }

    /// Ends the session, handing back the ledger and the output sink.
    pub fn into_parts(self) -> (HireLedger, W) {
        (self.ledger, self.console.into_output())
    }

    fn main_menu(&mut self) -> AppResult<()> {
        self.console.say(MAIN_MENU)?;
        let Some(line) = self.console.read_line(PROMPT_SELECT_OPTION)? else {
            self.state = MenuState::Terminated;
            return Ok(());
        };
        match parse_menu_selection(&line) {
            Ok(selection) => self.state = self.state.select(selection),
            Err(e) => self.console.say(e)?,
        }
        Ok(())
    }

    fn record_hires(&mut self) -> AppResult<Flow> {
        loop {
            let request = match self.collect_hire()? {
                HireEntry::Ready(request) => request,
                HireEntry::Cancelled => {
                    self.console.say("Returning to main menu.")?;
                    return Ok(Flow::Continue);
                }
                HireEntry::InputClosed => return Ok(Flow::InputClosed),
            };

            match self.ledger.record(request) {
                Ok(record) => {
                    let summary = hire_summary(record);
                    self.console.say(summary)?;
                }
                // only rules the prompts do not check end up here
                Err(e) => {
                    warn!(error = %e, "Hire rejected by ledger");
                    self.console.say(format!("Hire not saved: {e}"))?;
                }
            }

            match self.console.ask("Add another hire (y/n)? ", parse_yes_no)? {
                Some(true) => continue,
                Some(false) => {
                    self.console.say("Returning to main menu.")?;
                    return Ok(Flow::Continue);
                }
                None => return Ok(Flow::InputClosed),
            }
        }
    }

    fn collect_hire(&mut self) -> AppResult<HireEntry> {
        self.console.say(CUSTOMER_INSTRUCTIONS)?;

        let Some(name) = self.console.read_line("Customer name: ")? else {
            return Ok(HireEntry::InputClosed);
        };
        let name = name.trim().to_string();
        if name.is_empty() {
            return Ok(HireEntry::Cancelled);
        }

        let Some(phone) = self.console.ask("Phone number: ", validate_phone)? else {
            return Ok(HireEntry::InputClosed);
        };
        let Some(house) = self.console.read_line("House number: ")? else {
            return Ok(HireEntry::InputClosed);
        };
        let Some(postcode) = self
            .console
            .ask("Postcode: ", |s| Ok::<_, Infallible>(normalise_postcode(s)))?
        else {
            return Ok(HireEntry::InputClosed);
        };
        let Some(card_last4) = self.console.ask("Card last 4 digits: ", validate_card)? else {
            return Ok(HireEntry::InputClosed);
        };

        let Some(line_items) = self.collect_items()? else {
            return Ok(HireEntry::InputClosed);
        };

        let Some(nights) = self.console.ask("Number of nights: ", parse_nights)? else {
            return Ok(HireEntry::InputClosed);
        };
        let Some(on_time) = self.console.ask("Returned on time (y/n)? ", parse_yes_no)? else {
            return Ok(HireEntry::InputClosed);
        };

        Ok(HireEntry::Ready(HireRequest {
            customer: CustomerInfo {
                name,
                phone,
                house: house.trim().to_string(),
                postcode,
                card_last4,
            },
            line_items,
            nights,
            on_time,
        }))
    }

    /// Reads `CODE, quantity` lines until a blank line, requiring at least one.
    fn collect_items(&mut self) -> AppResult<Option<Vec<LineItem>>> {
        self.console.say(ITEM_INSTRUCTIONS)?;
        self.console.say(format!("Known codes: {}", catalog_codes()))?;

        let mut items = Vec::new();
        loop {
            let Some(line) = self.console.read_line("> ")? else {
                return Ok(None);
            };
            if line.trim().is_empty() {
                if items.is_empty() {
                    self.console.say("You must enter at least one item.")?;
                    continue;
                }
                return Ok(Some(items));
            }
            match parse_item_entry(&line) {
                Ok(item) => items.push(item),
                Err(e) => self.console.say(e)?,
            }
        }
    }

    fn show_report(&mut self) -> AppResult<()> {
        let report = EarningsReport::from_records(self.ledger.records());
        debug!(rows = report.rows.len(), format = ?self.format, "Rendering report");
        let text = render_report(&report, self.format)?;
        self.console.say("")?;
        self.console.print(text)
    }
}

/// Renders the report in the configured format, always ending in a newline.
pub fn render_report(report: &EarningsReport, format: ReportFormat) -> AppResult<String> {
    match format {
        ReportFormat::Table => Ok(report.render_table()),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
    }
}

fn hire_summary(record: &HireRecord) -> String {
    format!(
        "\nSaved hire:\n  \
         Customer ID: {}\n  \
         Customer:    {}\n  \
         Equipment:   {}\n  \
         Nights:      {}\n  \
         Returned on time: {}\n  \
         Extra charge for delayed return: {}\n  \
         Total cost:  {}\n",
        record.customer_id,
        record.customer.name,
        record.equipment_summary(),
        record.nights,
        record.on_time_flag(),
        record.late_penalty(),
        record.total(),
    )
}
