use {
    crate::common::{debug_println, DEBUG},
    clap::{Parser, ValueEnum},
    demos::program,
    std::{io::Write, sync::atomic::Ordering},
};

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Prints a fixed transcript of dispatch, branch, call and recursion demos"
)]
pub struct Cli {
    /// Run a single section [leave unspecified to run all of them]
    #[arg(long)]
    section: Option<Section>,

    /// Enable debug logging (written to stderr)
    #[arg(short, long)]
    debug: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Section {
    Dispatch,
    JumpTable,
    CallSequence,
    Recursion,
}

impl From<Section> for program::Section {
    fn from(section: Section) -> Self {
        match section {
            Section::Dispatch => program::Section::Dispatch,
            Section::JumpTable => program::Section::JumpTable,
            Section::CallSequence => program::Section::CallSequence,
            Section::Recursion => program::Section::Recursion,
        }
    }
}

pub(crate) fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    DEBUG.store(cli.debug, Ordering::Relaxed);
    let sections = match cli.section {
        Some(section) => vec![section.into()],
        None => program::Section::ALL.to_vec(),
    };
    debug_println!("sections to run: {sections:?}");
    program::run_sections(&sections, out)?;
    out.flush()?;
    Ok(())
}
