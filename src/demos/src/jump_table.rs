use {derive_more::Display, std::io::Write};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    #[display("Option 1 selected")]
    Option1,
    #[display("Option 2 selected")]
    Option2,
    #[display("Option 3 selected")]
    Option3,
    #[display("Option 4 selected")]
    Option4,
    #[display("Invalid option")]
    Invalid,
}

impl From<i32> for Selection {
    fn from(option: i32) -> Self {
        match option {
            1 => Selection::Option1,
            2 => Selection::Option2,
            3 => Selection::Option3,
            4 => Selection::Option4,
            _ => Selection::Invalid,
        }
    }
}

/// Prints the message for `option`. Anything outside `1..=4` takes the
/// default arm.
pub fn run(option: i32, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{}", Selection::from(option))
}
