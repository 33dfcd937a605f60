use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::{env, error::Error};

// Sample options declared in `select`'s test module. For each: the type
// name, a "supplied" constructor expression, the value that retrieval must
// produce when it is supplied, and the declared default produced when it is
// omitted.
const OPTIONS: [(&str, &str, &str, &str); 3] = [
    ("Alpha", "Alpha(1)", "1u32", "7u32"),
    ("Beta", "Beta(true)", "true", "false"),
    ("Gamma", "Gamma(42)", "42i64", "-3i64"),
];

fn permutations(items: &[usize]) -> Vec<Vec<usize>> {
    if items.is_empty() {
        return vec![Vec::new()];
    }
    let mut out = Vec::new();
    for (i, &item) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(i);
        for mut perm in permutations(&rest) {
            perm.insert(0, item);
            out.push(perm);
        }
    }
    out
}

fn main() -> Result<(), Box<dyn Error>> {
    // We auto-generate a unit test covering every permutation of every
    // subset of the sample options, so that retrieval is checked to be
    // independent of pack order and of which options are omitted.
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("permutations.rs");
    let mut f = File::create(&dest_path)?;

    writeln!(f, "#[test]")?;
    writeln!(f, "fn retrieval_over_all_pack_permutations() {{")?;
    for mask in 0u8..8 {
        let subset: Vec<usize> = (0..3).filter(|i| mask & (1 << i) != 0).collect();
        for perm in permutations(&subset) {
            let ctors: Vec<&str> = perm.iter().map(|&i| OPTIONS[i].1).collect();
            if ctors.is_empty() {
                writeln!(f, "    let pack = ();")?;
            } else {
                writeln!(f, "    let pack = ({},);", ctors.join(", "))?;
            }
            for (i, &(name, _, supplied, omitted)) in OPTIONS.iter().enumerate() {
                let expected = if perm.contains(&i) { supplied } else { omitted };
                writeln!(f, "    assert_eq!(pack.get::<{}>(), {});", name, expected)?;
            }
        }
    }
    writeln!(f, "}}")?;
    Ok(())
}
