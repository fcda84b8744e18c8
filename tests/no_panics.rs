//! Non-test code propagates errors instead of calling `unwrap`/`expect`.

use std::fs;
use std::path::Path;
use syn::visit::{self, Visit};
use walkdir::WalkDir;

#[derive(Default)]
struct PanicFinder {
    hits: Vec<String>,
}

fn is_cfg_test(attrs: &[syn::Attribute]) -> bool {
    attrs.iter().any(|attr| {
        attr.path().is_ident("cfg")
            && attr
                .parse_args::<syn::Meta>()
                .map(|meta| meta.path().is_ident("test"))
                .unwrap_or(false)
    })
}

impl<'ast> Visit<'ast> for PanicFinder {
    fn visit_item_mod(&mut self, node: &'ast syn::ItemMod) {
        if !is_cfg_test(&node.attrs) {
            visit::visit_item_mod(self, node);
        }
    }

    fn visit_expr_method_call(&mut self, node: &'ast syn::ExprMethodCall) {
        let name = node.method.to_string();
        if name == "unwrap" || name == "expect" {
            self.hits.push(name);
        }
        visit::visit_expr_method_call(self, node);
    }
}

#[test]
fn test_no_unwrap_or_expect_outside_tests() {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut offenders = Vec::new();

    for entry in WalkDir::new(&src)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        let text = fs::read_to_string(entry.path()).unwrap();
        let file = syn::parse_file(&text)
            .unwrap_or_else(|e| panic!("{}: {e}", entry.path().display()));
        let mut finder = PanicFinder::default();
        finder.visit_file(&file);
        for hit in finder.hits {
            offenders.push(format!("{}: .{}()", entry.path().display(), hit));
        }
    }

    assert!(offenders.is_empty(), "found:\n{}", offenders.join("\n"));
}
