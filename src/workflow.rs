//! Workflow chaining: sequence menu invocations as a graph walk.
//!
//! Each node shows a menu; the confirmed index picks the next node. An
//! unconfirmed exit falls back to [`Workflow::next_default`], and an
//! Input-mode confirmation (which has no index) ends the walk.

use crate::error::Result;
use crate::menu::Menu;
use std::collections::HashMap;
use std::rc::Rc;

/// One node in a menu workflow.
pub trait Workflow {
    /// Title shown on the menu screen.
    fn title(&self) -> &str;

    /// The menu items for this node.
    fn items(&self) -> &[String];

    /// Hook executed before this node's menu is shown.
    fn on_enter(&self) {}

    /// The node to visit after the item at `chosen` is confirmed.
    fn next(&self, chosen: usize) -> Option<Rc<dyn Workflow>>;

    /// The node to visit when the menu exits unconfirmed.
    fn next_default(&self) -> Option<Rc<dyn Workflow>> {
        None
    }
}

/// A map-backed [`Workflow`] node.
pub struct SimpleWorkflow {
    title: String,
    items: Vec<String>,
    on_enter: Option<Box<dyn Fn()>>,
    next: HashMap<usize, Rc<dyn Workflow>>,
    fallback: Option<Rc<dyn Workflow>>,
}

impl SimpleWorkflow {
    /// Create a node with a title and its menu items.
    pub fn new<I>(title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            title: title.into(),
            items: items.into_iter().map(Into::into).collect(),
            on_enter: None,
            next: HashMap::new(),
            fallback: None,
        }
    }

    /// Route the item at `chosen` to a successor node.
    pub fn set_next(&mut self, chosen: usize, next: Rc<dyn Workflow>) -> &mut Self {
        self.next.insert(chosen, next);
        self
    }

    /// Set the successor for unconfirmed exits.
    pub fn set_next_default(&mut self, next: Rc<dyn Workflow>) -> &mut Self {
        self.fallback = Some(next);
        self
    }

    /// Set the hook executed before this node's menu is shown.
    pub fn set_on_enter(&mut self, hook: impl Fn() + 'static) -> &mut Self {
        self.on_enter = Some(Box::new(hook));
        self
    }
}

impl Workflow for SimpleWorkflow {
    fn title(&self) -> &str {
        &self.title
    }

    fn items(&self) -> &[String] {
        &self.items
    }

    fn on_enter(&self) {
        if let Some(hook) = &self.on_enter {
            hook();
        }
    }

    fn next(&self, chosen: usize) -> Option<Rc<dyn Workflow>> {
        self.next.get(&chosen).cloned()
    }

    fn next_default(&self) -> Option<Rc<dyn Workflow>> {
        self.fallback.clone()
    }
}

/// Walk a workflow graph, showing one menu per node, until a node has
/// no successor for the outcome.
///
/// # Errors
///
/// Propagates menu construction and run-loop errors.
pub fn run_workflow(start: Rc<dyn Workflow>) -> Result<()> {
    let mut current = Some(start);
    while let Some(flow) = current {
        flow.on_enter();

        let mut menu: Menu = Menu::new()?;
        menu.set_title(flow.title());
        menu.append_lines(flow.items().iter().cloned())?;
        menu.run()?;

        current = match menu.chosen() {
            Some(chosen) => chosen.index.and_then(|idx| flow.next(idx)),
            None => flow.next_default(),
        };
        // The menu (and its terminal) is released before the next node runs.
        drop(menu);
    }
    Ok(())
}
