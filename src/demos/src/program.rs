use {
    crate::{call_sequence, dispatch, jump_table, recursion},
    std::io::Write,
};

/// One header plus one demonstration's output, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dispatch,
    JumpTable,
    CallSequence,
    Recursion,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Dispatch,
        Section::JumpTable,
        Section::CallSequence,
        Section::Recursion,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Section::Dispatch => "Testing vtable example:",
            Section::JumpTable => "Testing jump table example:",
            Section::CallSequence => "Testing call sequence example:",
            Section::Recursion => "Testing recursive function:",
        }
    }

    fn run_body(self, out: &mut impl Write) -> std::io::Result<()> {
        match self {
            Section::Dispatch => dispatch::run(out),
            Section::JumpTable => {
                // 5 is deliberately past the last case
                for option in 1..=5 {
                    jump_table::run(option, out)?;
                }
                Ok(())
            }
            Section::CallSequence => call_sequence::run(out),
            Section::Recursion => recursion::run(out),
        }
    }
}

pub fn run_section(section: Section, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{}", section.header())?;
    section.run_body(out)
}

/// Runs `sections` in the given order, separated by blank lines.
pub fn run_sections(sections: &[Section], out: &mut impl Write) -> std::io::Result<()> {
    for (i, &section) in sections.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        run_section(section, out)?;
    }
    Ok(())
}

pub fn run(out: &mut impl Write) -> std::io::Result<()> {
    run_sections(&Section::ALL, out)
}
