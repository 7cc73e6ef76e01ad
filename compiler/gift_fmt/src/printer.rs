//! In-order rendering of a tree.

use gift_ir::{BoolTree, Op, StringLookup};
use gift_stack::ensure_sufficient_stack;

use crate::{Emitter, StringEmitter};

/// Where parentheses go.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Grouping {
    /// No parentheses at all.
    #[default]
    Flat,
    /// Only where precedence or left associativity requires them.
    Minimal,
    /// Around every operator node except the root.
    Full,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RenderOptions {
    pub grouping: Grouping,
    /// End the output with `\n`.
    pub trailing_newline: bool,
}

/// Render `tree` flat: `left op right`, tokens separated by single spaces.
///
/// `a + (b u c)` renders as `a + b u c`.
pub fn render<N: StringLookup + ?Sized>(tree: &BoolTree, names: &N) -> String {
    render_with(tree, names, RenderOptions::default())
}

pub fn render_with<N: StringLookup + ?Sized>(
    tree: &BoolTree,
    names: &N,
    options: RenderOptions,
) -> String {
    let mut emitter = StringEmitter::with_capacity(tree.leaf_count() * 4);
    render_into(tree, names, options.grouping, &mut emitter);
    if options.trailing_newline {
        emitter.emit_newline();
    }
    emitter.output()
}

/// Render `tree` into `emitter`.
pub fn render_into<N, E>(tree: &BoolTree, names: &N, grouping: Grouping, emitter: &mut E)
where
    N: StringLookup + ?Sized,
    E: Emitter,
{
    Printer {
        names,
        grouping,
        emitter,
    }
    .node(tree);
}

/// Which operand of its parent a node is.
#[derive(Copy, Clone)]
enum Side {
    Left,
    Right,
}

struct Printer<'a, N: ?Sized, E> {
    names: &'a N,
    grouping: Grouping,
    emitter: &'a mut E,
}

impl<N: StringLookup + ?Sized, E: Emitter> Printer<'_, N, E> {
    fn node(&mut self, tree: &BoolTree) {
        ensure_sufficient_stack(|| match tree {
            BoolTree::Leaf(name) => self.emitter.emit(self.names.lookup(*name)),
            BoolTree::Internal { op, left, right } => {
                self.operand(*op, Side::Left, left);
                self.emitter.emit_space();
                self.emitter.emit(op.as_symbol());
                self.emitter.emit_space();
                self.operand(*op, Side::Right, right);
            }
        });
    }

    fn operand(&mut self, parent: Op, side: Side, child: &BoolTree) {
        if self.needs_parens(parent, side, child) {
            self.emitter.emit("(");
            self.node(child);
            self.emitter.emit(")");
        } else {
            self.node(child);
        }
    }

    fn needs_parens(&self, parent: Op, side: Side, child: &BoolTree) -> bool {
        let Some(op) = child.op() else {
            return false;
        };
        match self.grouping {
            Grouping::Flat => false,
            Grouping::Full => true,
            // Lower precedence binds tighter; all operators associate left.
            Grouping::Minimal => match side {
                Side::Left => op.precedence() > parent.precedence(),
                Side::Right => op.precedence() >= parent.precedence(),
            },
        }
    }
}
