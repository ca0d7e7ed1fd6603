//! Shelving Unit — assembly demo
//!
//! Loads the bundled anchor catalog, assembles a seven-level shelving unit,
//! and prints the resulting plan the way a renderer would consume it.

use shelf_assembly::{assemble, Catalog, PartRole, ShelfConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let catalog = Catalog::from_json_str(include_str!("../data/shelving-unit.json"))?;

    let config = ShelfConfig::new().with_level_count(7).with_color("white");
    let plan = assemble(&catalog, &config)?;

    println!("=== Shelving Unit Assembly ===");
    println!();
    println!("{}", plan.summary());
    println!();

    for role in [
        PartRole::BackPanel,
        PartRole::Leg,
        PartRole::Stand,
        PartRole::Console,
        PartRole::BaseBoard,
        PartRole::Level,
    ] {
        for placement in plan.placements_for_role(role) {
            let offset = placement.offset();
            let side = placement
                .side()
                .map_or(String::new(), |s| format!(" [{}]", s.as_str()));
            println!(
                "  {:<12}{side}  offset ({:8.2}, {:8.2}, {:8.2})",
                placement.role().as_str(),
                offset.x,
                offset.y,
                offset.z
            );
        }
    }

    println!();
    println!("Part quantities:");
    for (part_id, quantity) in plan.part_counts() {
        println!("  {quantity:>3} x {part_id}");
    }

    Ok(())
}
