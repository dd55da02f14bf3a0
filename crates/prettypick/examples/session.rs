#![allow(clippy::print_stdout)]

use prettypick::error::ColorError;
use prettypick::names::PALETTE;
use prettypick::opt::Options;
use prettypick::{Changes, Channel, Gradient, Picker};

fn report(label: &str, picker: &Picker, changes: Changes) {
    println!(
        "{:<24} {}  {}  alpha {:>3}  changed {:?}",
        label,
        picker.hex(),
        picker.hsv(),
        picker.value(Channel::Alpha),
        changes
    );
}

fn main() -> Result<(), ColorError> {
    let mut picker = Picker::new("#87CEEB80", Options::with_alpha())?;
    report("open", &picker, Changes::empty());

    let changes = picker.edit_channel(Channel::Hue, "390");
    report("hue := 390", &picker, changes);

    let changes = picker.drag_square(150.0, 40.0);
    report("drag square", &picker, changes);

    let changes = picker.drag_alpha_bar(50.0);
    report("drag alpha bar", &picker, changes);

    let changes = picker.edit_hex("#not-hex");
    report("hex := #not-hex", &picker, changes);

    for name in PALETTE.iter().take(3) {
        let changes = picker.pick(*name)?;
        report(&format!("pick {}", name), &picker, changes);
    }

    let changes = picker.reset();
    report("reset", &picker, changes);

    if let Some(square) = picker.render(Gradient::Square) {
        println!(
            "square is {}x{} with {} bytes of RGBA",
            square.width(),
            square.height(),
            square.to_rgba_bytes().len()
        );
    }

    if let Some(selection) = picker.commit() {
        println!(
            "selected {:?} = {} = {}",
            selection.components(),
            selection.hsv(),
            selection.hex()
        );
    }
    Ok(())
}
