//! Workflow demo: chain three menus off a root menu's selection.
//!
//! Run with `cargo run --example workflow`.

use linepick::{run_workflow, SimpleWorkflow, Workflow};
use std::rc::Rc;

fn main() -> linepick::Result<()> {
    env_logger::init();

    let mut r1 = SimpleWorkflow::new("r-1 node", ["1st line", "2nd line", "3rd line"]);
    r1.set_on_enter(|| println!("entering r-1 node"));

    let mut root = SimpleWorkflow::new("root", ["1st line", "2nd line", "3rd line"]);
    root.set_next(0, Rc::new(r1));
    root.set_next(
        1,
        Rc::new(SimpleWorkflow::new(
            "r-2 node",
            ["1st line", "2nd line", "3rd line"],
        )),
    );
    root.set_next(
        2,
        Rc::new(SimpleWorkflow::new(
            "r-3 node",
            ["1st line", "2nd line", "3rd line"],
        )),
    );

    run_workflow(Rc::new(root) as Rc<dyn Workflow>)
}
