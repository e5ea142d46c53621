use pbst::functional::Tree;

use std::collections::HashSet;

/// Builds a tree by inserting the keys in order.
fn build(xs: &[String]) -> Tree<String> {
    xs.iter().fold(Tree::new(), |tree, x| tree.insert(x.clone()))
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<String>) -> bool {
        let tree = build(&xs);

        xs.iter().all(|x| tree.contains(x.as_str()))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<String>, nots: Vec<String>) -> bool {
        let tree = build(&xs);
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x.as_str()))
    }
}

quickcheck::quickcheck! {
    fn insert_then_contains(xs: Vec<String>, key: String) -> bool {
        build(&xs).insert(key.clone()).contains(&key)
    }
}

quickcheck::quickcheck! {
    fn insert_adds_one_even_for_duplicates(xs: Vec<String>) -> bool {
        let mut tree = Tree::new();
        for (inserted, x) in xs.iter().enumerate() {
            let new_tree = tree.insert(x.clone());
            if new_tree.size() != inserted + 1 {
                return false;
            }
            tree = new_tree;
        }

        // Putting every key in a second time doubles the size.
        let doubled = xs.iter().fold(tree.clone(), |tree, x| tree.insert(x.clone()));
        tree.size() == xs.len() && doubled.size() == 2 * xs.len()
    }
}

quickcheck::quickcheck! {
    fn insert_leaves_original_alone(xs: Vec<String>, ys: Vec<String>) -> bool {
        let tree = build(&xs);
        let size = tree.size();
        let rendered = tree.render();

        let newer = ys.iter().fold(tree.clone(), |tree, y| tree.insert(y.clone()));

        tree.size() == size
            && tree.render() == rendered
            && newer.size() == xs.len() + ys.len()
    }
}

quickcheck::quickcheck! {
    fn collect_matches_repeated_insert(xs: Vec<String>) -> bool {
        let collected: Tree = xs.iter().cloned().collect();

        collected.render() == build(&xs).render() && collected.size() == xs.len()
    }
}

quickcheck::quickcheck! {
    fn single_key_renders_in_parens(key: String) -> bool {
        Tree::new().insert(key.clone()).render() == format!("({})", key)
    }
}
