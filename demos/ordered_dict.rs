use eyre::Result;
use log::info;
use ordered_dict::{
    flatten::{flatten, Element::*},
    OrderedMap,
};

/// Sets a few keys, prints them back in order, then flattens a nested list.
///
/// Run with `RUST_LOG=trace` to watch nodes being linked into the chain.
fn main() -> Result<()> {
    pretty_env_logger::try_init()?;

    let mut ordered_map = OrderedMap::new();
    ordered_map.insert("one", 1);
    ordered_map.insert("two", 2);
    ordered_map.insert("three", 3);

    for key in ordered_map.key_list() {
        match ordered_map.get(key) {
            Some(value) => println!("{}: {}", key, value),
            None => println!("{}: <absent>", key),
        }
    }

    let previous = ordered_map.insert("two", 20);
    info!("replaced {:?}, order is still {:?}", previous, ordered_map.key_list());

    let list = vec![
        Scalar(1),
        Scalar(2),
        Nested(vec![Scalar(3), Scalar(4)]),
        Nested(vec![Scalar(5), Scalar(6)]),
    ];
    println!("{:?}", flatten(list));

    Ok(())
}
