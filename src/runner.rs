use std::{collections::VecDeque, io::Write};

use indexmap::IndexMap;

use crate::{
    catalog,
    diagnostics::{DojoError, Result},
};

/// One pure computation plus the label it is listed under.
#[derive(Debug)]
pub struct Demo {
    label: &'static str,
    render: fn() -> Result<Vec<String>>,
}

impl Demo {
    pub fn new(label: &'static str, render: fn() -> Result<Vec<String>>) -> Self {
        Self { label, render }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn render(&self) -> Result<Vec<String>> {
        (self.render)()
    }
}

/// A named, ordered group of demonstrations.
#[derive(Debug)]
pub struct Section {
    name: &'static str,
    demos: Vec<Demo>,
}

impl Section {
    pub fn new(name: &'static str, demos: Vec<Demo>) -> Self {
        Self { name, demos }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn demos(&self) -> &[Demo] {
        &self.demos
    }

    /// Renders the banner line followed by every demonstration in
    /// declaration order.
    pub fn render(&self) -> Result<Vec<String>> {
        let mut lines = vec![banner(self.name)];
        for demo in &self.demos {
            lines.extend(demo.render()?);
        }
        Ok(lines)
    }
}

fn banner(name: &str) -> String {
    format!("--- {name} ---")
}

/// Holds the section catalogue and drives a single pass over it.
pub struct Runner {
    sections: IndexMap<&'static str, Section>,
}

impl Runner {
    pub fn new() -> Self {
        Self::from_sections(catalog::install())
    }

    pub fn from_sections(sections: Vec<Section>) -> Self {
        Self {
            sections: sections
                .into_iter()
                .map(|section| (section.name, section))
                .collect(),
        }
    }

    pub fn section_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections.keys().copied()
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Case-insensitive lookup of a single section.
    pub fn section(&self, name: &str) -> Result<&Section> {
        self.sections
            .values()
            .find(|section| section.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| DojoError::UnknownSection(name.to_string()))
    }

    /// Starts the single pass over the catalogue. Consumes the runner: a run
    /// is not restartable.
    pub fn run(self) -> Run {
        Run {
            sections: self
                .sections
                .into_values()
                .collect::<Vec<_>>()
                .into_iter(),
            demos: Vec::new().into_iter(),
            pending: VecDeque::new(),
            finished: false,
        }
    }

    /// Drives the run to completion, writing each line to `sink` as soon as
    /// it is rendered.
    pub fn write_to(self, sink: &mut impl Write) -> Result<()> {
        for line in self.run() {
            writeln!(sink, "{}", line?)?;
        }
        Ok(())
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

/// A lazy, finite pass over the catalogue: one banner line per section, then
/// each demonstration's lines in declaration order. The first error ends the
/// run; later calls yield nothing.
pub struct Run {
    sections: std::vec::IntoIter<Section>,
    demos: std::vec::IntoIter<Demo>,
    pending: VecDeque<String>,
    finished: bool,
}

impl Iterator for Run {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }
            if let Some(demo) = self.demos.next() {
                match demo.render() {
                    Ok(lines) => self.pending.extend(lines),
                    Err(err) => {
                        self.finished = true;
                        return Some(Err(err));
                    }
                }
                continue;
            }
            match self.sections.next() {
                Some(section) => {
                    self.pending.push_back(banner(section.name));
                    self.demos = section.demos.into_iter();
                }
                None => {
                    self.finished = true;
                    return None;
                }
            }
        }
    }
}
