use {derive_more::Display, std::io::Write};

/// The closed set of types dispatched over. Each one carries no state and
/// exposes a single behavior.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    #[display("DerivedA")]
    A,
    #[display("DerivedB")]
    B,
    #[display("DerivedC")]
    C,
}

impl Variant {
    pub fn execute(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "Executing {self}")
    }
}

pub fn run(out: &mut impl Write) -> std::io::Result<()> {
    let objects = [Variant::A, Variant::B, Variant::C];
    for object in &objects {
        object.execute(out)?;
    }
    Ok(())
}
