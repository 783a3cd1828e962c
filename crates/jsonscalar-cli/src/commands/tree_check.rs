use anyhow::Context;
use jsonscalar::Tree;

/// Inserts the comma-separated integers in `insert_spec`, removes the ones
/// in `remove_spec`, then prints the tree's size and the validator's
/// verdict.
pub fn run(insert_spec: &str, remove_spec: &str) -> anyhow::Result<()> {
    let to_insert = parse_list(insert_spec).context("parsing insert list")?;
    let to_remove = parse_list(remove_spec).context("parsing remove list")?;

    let mut tree = Tree::new();
    for value in to_insert {
        tree.insert(value);
    }
    for value in to_remove {
        tree.remove(&value);
    }

    let valid = tree.validate();
    println!("size: {}", tree.len());
    println!("valid: {valid}");

    if !valid {
        anyhow::bail!("tree failed validation");
    }
    Ok(())
}

fn parse_list(spec: &str) -> anyhow::Result<Vec<i64>> {
    if spec.is_empty() {
        return Ok(Vec::new());
    }
    spec.split(',')
        .map(|s| s.trim().parse::<i64>().with_context(|| format!("invalid integer {s:?}")))
        .collect()
}
