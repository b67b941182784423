use crate::core::{Fixlet, FixletStore, SortField};
use crate::utils::error::{FixletError, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

const MENU: &str = "\nChoose an action:\n\
1. List entries\n\
2. Query entries by Name\n\
3. Sort entries\n\
4. Add an entry\n\
5. Delete an entry\n\
6. Exit\n\
Enter choice: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Query,
    Sort,
    Add,
    Delete,
    Exit,
    Invalid(String),
}

impl Command {
    pub fn parse(token: &str) -> Self {
        match token {
            "1" => Command::List,
            "2" => Command::Query,
            "3" => Command::Sort,
            "4" => Command::Add,
            "5" => Command::Delete,
            "6" => Command::Exit,
            other => Command::Invalid(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingCommand,
    Terminated,
}

/// Whitespace-delimited token reader; a prompt's answers may span lines.
pub struct TokenReader<R: BufRead> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// `Ok(None)` at end of input.
    pub fn next_token(&mut self) -> std::io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Exactly `N` tokens, or `Ok(None)` if input ends first.
    pub fn next_tokens<const N: usize>(&mut self) -> std::io::Result<Option<[String; N]>> {
        let mut tokens: [String; N] = std::array::from_fn(|_| String::new());
        for slot in tokens.iter_mut() {
            match self.next_token()? {
                Some(token) => *slot = token,
                None => return Ok(None),
            }
        }
        Ok(Some(tokens))
    }
}

/// Menu-driven loop that owns the store for the life of the process.
pub struct Session<R: BufRead, W: Write> {
    store: FixletStore,
    reader: TokenReader<R>,
    output: W,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: FixletStore, input: R, output: W) -> Self {
        Self {
            store,
            reader: TokenReader::new(input),
            output,
            state: SessionState::AwaitingCommand,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn into_store(self) -> FixletStore {
        self.store
    }

    /// Runs until exit is chosen or input ends.
    pub fn run(&mut self) -> Result<()> {
        while self.state == SessionState::AwaitingCommand {
            self.step().map_err(FixletError::SessionError)?;
        }
        self.output.flush().map_err(FixletError::SessionError)?;
        Ok(())
    }

    /// One menu round trip.
    pub fn step(&mut self) -> std::io::Result<SessionState> {
        self.prompt(MENU)?;

        let Some(token) = self.reader.next_token()? else {
            tracing::debug!("Input closed, ending session");
            self.state = SessionState::Terminated;
            return Ok(self.state);
        };

        let command = Command::parse(&token);
        tracing::debug!("Dispatching command: {:?}", command);

        match command {
            Command::List => self.list_entries()?,
            Command::Query => self.query_entries()?,
            Command::Sort => self.sort_entries()?,
            Command::Add => self.add_entry()?,
            Command::Delete => self.delete_entry()?,
            Command::Exit => {
                writeln!(self.output, "Exiting...")?;
                self.state = SessionState::Terminated;
            }
            Command::Invalid(_) => writeln!(self.output, "Invalid choice, try again.")?,
        }

        Ok(self.state)
    }

    fn prompt(&mut self, text: &str) -> std::io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Reads a sub-prompt answer; end of input terminates the session.
    fn read_answer<const N: usize>(&mut self) -> std::io::Result<Option<[String; N]>> {
        let answer = self.reader.next_tokens::<N>()?;
        if answer.is_none() {
            tracing::debug!("Input closed during prompt, ending session");
            self.state = SessionState::Terminated;
        }
        Ok(answer)
    }

    fn write_listing(&mut self) -> std::io::Result<()> {
        for line in self.store.list() {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    fn list_entries(&mut self) -> std::io::Result<()> {
        writeln!(self.output, "Listing all entries:")?;
        self.write_listing()
    }

    fn query_entries(&mut self) -> std::io::Result<()> {
        self.prompt("Enter Name to query: ")?;
        let Some([name]) = self.read_answer::<1>()? else {
            return Ok(());
        };

        writeln!(self.output, "Querying entries for Name: {}", name)?;
        for fixlet in self.store.query_by_name(&name) {
            writeln!(self.output, "{}", fixlet)?;
        }
        Ok(())
    }

    fn sort_entries(&mut self) -> std::io::Result<()> {
        self.prompt("Enter field to sort by (SiteID, Criticality, RelevantComputerCount): ")?;
        let Some([field]) = self.read_answer::<1>()? else {
            return Ok(());
        };

        match field.parse::<SortField>() {
            Ok(sort_field) => self.store.sort_by_field(sort_field),
            Err(e) => tracing::debug!("Leaving order unchanged: {}", e),
        }

        writeln!(self.output, "Entries sorted by {}", field)?;
        self.list_entries()
    }

    fn add_entry(&mut self) -> std::io::Result<()> {
        self.prompt("Enter SiteID, FxiletID, Name, Criticality, RelevantComputerCount: ")?;
        let answer = self.read_answer::<5>()?;
        let Some([site_id, fixlet_id, name, criticality, raw_count]) = answer else {
            return Ok(());
        };

        let relevant_computer_count = match raw_count.parse::<i64>() {
            Ok(count) => count,
            Err(_) => {
                // A non-integer count rejects the whole record; nothing is stored.
                writeln!(self.output, "Invalid RelevantComputerCount: {}", raw_count)?;
                return Ok(());
            }
        };

        self.store.add(Fixlet::new(
            site_id,
            fixlet_id,
            name,
            criticality,
            relevant_computer_count,
        ));
        writeln!(self.output, "Entry added successfully!")
    }

    fn delete_entry(&mut self) -> std::io::Result<()> {
        self.prompt("Enter FxiletID to delete: ")?;
        let Some([fixlet_id]) = self.read_answer::<1>()? else {
            return Ok(());
        };

        match self.store.delete(&fixlet_id) {
            Some(removed) => {
                tracing::debug!("Removed fixlet: {}", removed);
                writeln!(self.output, "Entry deleted successfully!")
            }
            None => writeln!(self.output, "Entry not found!"),
        }
    }
}
