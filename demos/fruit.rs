//! Grows a tree on a toy fruit table, prints it,
//! and classifies a few rows.
//!
//! ```sh
//! cargo run --example fruit
//! ```
use ginitree::prelude::*;


fn main() -> Result<(), TreeError> {
    let training = vec![
        row!["Green",  3, "Apple"],
        row!["Yellow", 3, "Apple"],
        row!["Red",    1, "Grape"],
        row!["Red",    1, "Grape"],
        row!["Yellow", 3, "Lemon"],
    ];
    let header = ["color", "diameter", "label"];
    let dataset = Dataset::new(header, training)?;

    let tree = DecisionTreeBuilder::new()
        .tie_break(TieBreak::Last)
        .build();
    println!("{tree}");

    let f = tree.fit(&dataset)?;
    print_tree(&f);

    let testing = vec![
        row!["Green",  3, "Apple"],
        row!["Yellow", 4, "Apple"],
        row!["Red",    2, "Grape"],
        row!["Red",    1, "Grape"],
        row!["Yellow", 3, "Lemon"],
    ];
    print_predictions(&f, &testing)?;

    Ok(())
}
