use std::io::Write;

pub fn function_one(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Function One")
}

pub fn function_two(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Function Two")
}

pub fn function_three(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Function Three")
}

pub fn run(out: &mut impl Write) -> std::io::Result<()> {
    function_one(out)?;
    function_two(out)?;
    function_three(out)
}
