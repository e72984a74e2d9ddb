use anyhow::Result;
use property_tree::prelude::*;

fn main() -> Result<()> {
    // RUST_LOG=property_tree=debug prints every criterion decision
    env_logger::init();

    let tree = PropertyNode::builder()
        .name("features")
        .child(|c| {
            c.name("darkMode")
                .value(true)
                .child(|c| c.name("regionInclude").values(["eu", "us"]))
        })
        .child(|c| {
            c.name("newCheckout")
                .value(true)
                .child(|c| c.name("regionExclude").value("eu"))
                .child(|c| c.name("versionStart").value(3))
                .child(|c| c.name("versionEnd").value(5))
        })
        .child(|c| c.name("telemetry").value(false))
        .build()?;

    println!("All features:");
    println!("{}", tree);

    for (region, version) in [("eu", 4), ("us", 4), ("us", 6)] {
        let criteria = Criteria::new([
            Criterion::single("region", region),
            Criterion::single("version", version),
        ]);
        let visible = tree.filter(by_criteria(criteria));

        println!("\nregion={} version={}:", region, version);
        println!("{}", visible);
    }

    Ok(())
}
