//! Simple demo: a titled menu with sparse lines and wide runes.
//!
//! Run with `cargo run --example simple`. Navigate with the arrow keys,
//! `/` to fuzzy-search, `:` to type free text, Enter to confirm, Esc to
//! leave.

use linepick::Menu;

fn main() -> linepick::Result<()> {
    env_logger::init();

    let mut menu: Menu = Menu::new()?;
    menu.set_title("TEST");
    menu.set_line(0, "0th line")?;
    menu.set_line(1, "1st line")?;
    menu.set_line(2, "2nd line")?;
    menu.set_line(4, "4th line")?;
    menu.set_line(5, "第五行a")?;
    menu.set_line(6, "第六行ba")?;
    menu.set_line(7, "7TH LINE")?;
    menu.run()?;

    match menu.chosen() {
        Some(chosen) => match chosen.index {
            Some(idx) => println!("you've chosen line {idx}, content is: {}", chosen.content),
            None => println!("you typed: {}", chosen.content),
        },
        None => println!("you did not choose any item."),
    }
    Ok(())
}
