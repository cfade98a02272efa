//! Interactive text menu driving the contact store.
//!
//! The controller owns no contact state. It borrows a [`ContactRepository`],
//! a [`ContactStorage`] and a [`PhoneNumberValidator`] and translates menu
//! choices into calls on them. Validation failures are reported and the
//! specific input is re-requested or abandoned; accepted state is never lost.

mod prompt;

pub use prompt::Prompter;

use crate::domain::{PhoneNumber, PhoneNumberValidator, ValidationError};
use crate::models::Contact;
use crate::persistence::ContactStorage;
use crate::repositories::{ContactRepository, ContactStore};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

const MENU: &str = "\
1. Add Contact
2. Display Contacts (Sorted)
3. Search Contact (Partial Name)
4. Delete Contact
5. Update Contact
6. Display Contacts Grouped by Country Code
7. Export Contacts to CSV
8. Count Contacts
9. Save and Exit";

/// A menu entry selected by number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    DisplaySorted,
    Search,
    Delete,
    Update,
    GroupByCountryCode,
    ExportCsv,
    Count,
    SaveAndExit,
}

impl MenuChoice {
    /// Map a menu number (1-9) to a choice.
    pub fn from_number(number: i64) -> Option<Self> {
        let choice = match number {
            1 => Self::Add,
            2 => Self::DisplaySorted,
            3 => Self::Search,
            4 => Self::Delete,
            5 => Self::Update,
            6 => Self::GroupByCountryCode,
            7 => Self::ExportCsv,
            8 => Self::Count,
            9 => Self::SaveAndExit,
            _ => return None,
        };
        Some(choice)
    }
}

/// Load the store through `storage`, degrading to an empty store on failure.
pub fn load_store<W: Write>(storage: &dyn ContactStorage, out: &mut W) -> io::Result<ContactStore> {
    match storage.load() {
        Ok(contacts) => {
            if !contacts.is_empty() {
                writeln!(out, "Contacts loaded successfully.\n")?;
            }
            Ok(ContactStore::from(contacts))
        }
        Err(e) => {
            warn!("Starting with an empty phone book: {}", e);
            writeln!(out, "Failed to load contacts: {}", e)?;
            writeln!(out, "Starting with an empty phone book.\n")?;
            Ok(ContactStore::new())
        }
    }
}

fn show_contacts<'c, R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    contacts: impl IntoIterator<Item = &'c Contact>,
) -> io::Result<()> {
    for contact in contacts {
        prompter.say(contact)?;
        prompter.say("")?;
    }
    Ok(())
}

/// Menu loop over a prompt stream.
pub struct InteractionController<'a, R, W> {
    prompter: Prompter<R, W>,
    repo: &'a mut dyn ContactRepository,
    storage: &'a dyn ContactStorage,
    validator: &'a PhoneNumberValidator,
}

impl<'a, R: BufRead, W: Write> InteractionController<'a, R, W> {
    pub fn new(
        prompter: Prompter<R, W>,
        repo: &'a mut dyn ContactRepository,
        storage: &'a dyn ContactStorage,
        validator: &'a PhoneNumberValidator,
    ) -> Self {
        Self {
            prompter,
            repo,
            storage,
            validator,
        }
    }

    /// Run until "Save and Exit" is chosen or input ends.
    ///
    /// The contacts are saved on the way out in both cases. If the prompt
    /// streams fail mid-session a save is still attempted before the I/O
    /// error is returned.
    pub fn run(&mut self) -> io::Result<()> {
        let result = self.run_menu();
        if let Err(e) = &result {
            warn!("Session aborted by I/O error, saving contacts: {}", e);
            if let Err(save_err) = self.storage.save(self.repo.contacts()) {
                warn!("Failed to save contacts: {}", save_err);
            }
        }
        result
    }

    fn run_menu(&mut self) -> io::Result<()> {
        loop {
            let Some(choice) = self.read_choice()? else {
                debug!("Input closed, saving before exit");
                return self.save_and_exit();
            };

            debug!(?choice, "Menu choice");
            match choice {
                MenuChoice::Add => self.add_contact()?,
                MenuChoice::DisplaySorted => self.display_sorted()?,
                MenuChoice::Search => self.search_contact()?,
                MenuChoice::Delete => self.delete_contact()?,
                MenuChoice::Update => self.update_contact()?,
                MenuChoice::GroupByCountryCode => self.display_grouped()?,
                MenuChoice::ExportCsv => self.export_csv()?,
                MenuChoice::Count => self.count_contacts()?,
                MenuChoice::SaveAndExit => return self.save_and_exit(),
            }
        }
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Show the menu until a valid choice is read. `None` means end of input.
    fn read_choice(&mut self) -> io::Result<Option<MenuChoice>> {
        loop {
            self.prompter.say(MENU)?;
            let Some(answer) = self.prompter.ask_trimmed("Enter your choice: ")? else {
                return Ok(None);
            };

            match answer.parse::<i64>() {
                Ok(number) => match MenuChoice::from_number(number) {
                    Some(choice) => return Ok(Some(choice)),
                    None => self.prompter.say("Invalid choice. Try again.\n")?,
                },
                Err(_) => self.prompter.say("Invalid input. Enter a number from 1 to 9.\n")?,
            }
        }
    }

    fn add_contact(&mut self) -> io::Result<()> {
        let Some(name) = self.prompter.ask_trimmed("Enter Name: ")? else {
            return Ok(());
        };
        if name.is_empty() {
            return self.prompter.say(format!("{}.", ValidationError::EmptyName));
        }

        let Some(email) = self.prompter.ask_trimmed("Enter Email: ")? else {
            return Ok(());
        };
        let mut contact = match Contact::new(&name, &email) {
            Ok(contact) => contact,
            Err(e) => return self.prompter.say(format!("{}.", e)),
        };

        for phone in self.collect_phone_numbers()? {
            contact.add_phone_number(phone);
        }

        self.repo.add(contact);
        self.prompter.say("Contact added successfully.\n")
    }

    /// Read phone numbers until the user declines another one.
    ///
    /// Rejected input is reported and re-requested; numbers already accepted
    /// are kept. Ends early, keeping what was accepted, if input runs out.
    fn collect_phone_numbers(&mut self) -> io::Result<Vec<PhoneNumber>> {
        let mut phones = Vec::new();

        loop {
            let Some(code) = self
                .prompter
                .ask_trimmed("Enter Country Code (e.g., 1 for USA): ")?
            else {
                break;
            };
            if !self.validator.is_supported_code(&code) {
                self.prompter.say("Unsupported country code. Try again.")?;
                continue;
            }

            let Some(number) = self
                .prompter
                .ask_trimmed("Enter Number (without country code): ")?
            else {
                break;
            };
            match self.validator.validate(&code, &number) {
                Ok(phone) => phones.push(phone),
                Err(e) => {
                    self.prompter.say(e)?;
                    continue;
                }
            }

            if !self.prompter.confirm("Add another phone number? (y/n): ")? {
                break;
            }
        }

        Ok(phones)
    }

    fn display_sorted(&mut self) -> io::Result<()> {
        if self.repo.count() == 0 {
            return self.prompter.say("No contacts to display.\n");
        }
        show_contacts(&mut self.prompter, self.repo.sorted_by_name())
    }

    fn search_contact(&mut self) -> io::Result<()> {
        let Some(query) = self.prompter.ask("Enter partial name to search: ")? else {
            return Ok(());
        };

        let found = self.repo.find_by_partial_name(&query);
        if found.is_empty() {
            return self.prompter.say("Contact not found.\n");
        }
        show_contacts(&mut self.prompter, found)
    }

    fn delete_contact(&mut self) -> io::Result<()> {
        let Some(token) = self
            .prompter
            .ask_trimmed("Enter name or phone number to delete: ")?
        else {
            return Ok(());
        };

        if self.repo.remove_matching(&token) {
            self.prompter.say("Contact deleted.\n")
        } else {
            self.prompter.say("Contact not found.\n")
        }
    }

    fn update_contact(&mut self) -> io::Result<()> {
        let Some(name) = self.prompter.ask_trimmed("Enter name to update: ")? else {
            return Ok(());
        };
        if self.repo.find_by_name(&name).is_none() {
            return self.prompter.say("Contact not found.\n");
        }

        if self.prompter.confirm("Update email? (y/n): ")? {
            if let Some(email) = self.prompter.ask_trimmed("Enter new email: ")? {
                // Lookup is repeated because the prompter and store are borrowed separately
                let updated = match self.repo.find_by_name_mut(&name) {
                    Some(contact) => contact.update_email(&email),
                    None => Ok(()),
                };
                if updated.is_err() {
                    self.prompter.say("Invalid email format, keeping old email.")?;
                }
            }
        }

        if self.prompter.confirm("Update phone numbers? (y/n): ")? {
            let phones = self.collect_phone_numbers()?;
            if phones.is_empty() {
                self.prompter
                    .say("No phone numbers entered, keeping existing numbers.")?;
            } else if let Some(contact) = self.repo.find_by_name_mut(&name) {
                contact.replace_phone_numbers(phones);
            }
        }

        self.prompter.say("Contact updated.\n")
    }

    fn display_grouped(&mut self) -> io::Result<()> {
        if self.repo.count() == 0 {
            return self.prompter.say("No contacts to display.\n");
        }

        for (code, members) in self.repo.group_by_country_code() {
            self.prompter.say(format!("Country Code +{}:", code))?;
            show_contacts(&mut self.prompter, members)?;
        }
        Ok(())
    }

    fn export_csv(&mut self) -> io::Result<()> {
        match self.storage.export_csv(self.repo.contacts()) {
            Ok(()) => self.prompter.say("Contacts exported to CSV.\n"),
            Err(e) => self.prompter.say(format!("Failed to export contacts: {}\n", e)),
        }
    }

    fn count_contacts(&mut self) -> io::Result<()> {
        self.prompter
            .say(format!("Total contacts: {}\n", self.repo.count()))
    }

    /// Save failures are reported but do not keep the session alive.
    fn save_and_exit(&mut self) -> io::Result<()> {
        match self.storage.save(self.repo.contacts()) {
            Ok(()) => self.prompter.say("Contacts saved. Exiting..."),
            Err(e) => {
                warn!("Exiting without saving: {}", e);
                self.prompter.say(format!("Error saving contacts: {}", e))
            }
        }
    }
}
