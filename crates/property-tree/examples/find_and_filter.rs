use anyhow::Result;
use property_tree::prelude::*;

fn main() -> Result<()> {
    // RUST_LOG=property_tree=trace shows which subtrees are dropped
    env_logger::init();

    let tree = PropertyNode::builder()
        .name("settings")
        .description("application settings")
        .child(|c| {
            c.name("editor")
                .child(|c| c.name("wrap").value(true))
                .child(|c| c.name("tabWidth").value(4))
        })
        .child(|c| {
            c.name("experimental")
                .child(|c| c.name("wrap").value(false))
                .child(|c| c.name("gpu").value(true))
        })
        .build()?;

    println!("Tree:");
    println!("{}", tree);

    // Full-tree search returns the first match in pre-order
    let wrap = tree.find(by_name("wrap"));
    println!("\nfind(wrap).is_set() = {}", wrap.property().is_set());

    // Child lookup only looks one level down
    let shallow = tree.find_child(by_name("wrap"));
    println!("find_child(wrap) found = {}", shallow.is_found());

    // Missing nodes come back as the sentinel, no null check needed
    println!(
        "find(missing).is_set() = {}",
        tree.find(by_name("missing")).property().is_set()
    );

    // Drop the experimental subtree
    let stable = tree.filter(|node| node.name() != "experimental");
    println!("\nWithout experimental:");
    println!("{}", stable);

    Ok(())
}
