use std::hash::BuildHasherDefault;

use chain_hash::HashMap;
use chain_hash::hash_table::Resize;
use clap::Parser;
use siphasher::sip::SipHasher;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'n', long = "entries", default_value_t = 1000)]
    entries: u64,

    /// Erase this many entries after filling, to exercise shrinking.
    #[arg(short = 'e', long = "erase", default_value_t = 0)]
    erase: u64,

    /// Double the bucket array once more before reporting.
    #[arg(long = "grow")]
    grow: bool,
}

fn main() {
    let args = Args::parse();

    let mut map: HashMap<u64, u64, BuildHasherDefault<SipHasher>> = HashMap::new();
    println!("Initial capacity: {}", map.capacity());
    println!("Filling map with {} u64 keys...", args.entries);

    for key in 0..args.entries {
        if !map.insert(key, key * key) {
            panic!("Key already exists in map: {}", key);
        }
    }
    println!(
        "Inserted {} keys, capacity {} ({:.2}% load)",
        map.len(),
        map.capacity(),
        map.load_factor() * 100.0
    );

    let erased = (0..args.erase.min(args.entries))
        .filter(|key| map.erase(key))
        .count();
    if erased > 0 {
        println!(
            "Erased {} keys, capacity {} ({:.2}% load)",
            erased,
            map.capacity(),
            map.load_factor() * 100.0
        );
    }

    if args.grow {
        map.rehash(Resize::Grow);
        println!("Grew manually to capacity {}", map.capacity());
    }

    map.debug_stats().print();
    map.print_bucket_histogram();
}
