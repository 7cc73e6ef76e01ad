//! The fixpoint driver: node stabilization and whole-tree passes.

use gift_ir::BoolTree;
use gift_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::{apply_rewrite, find_rewrite, CanonError, RuleId};

/// Iteration bounds for [`Canonicalizer`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CanonOptions {
    /// Maximum number of whole-tree passes, including the final pass that
    /// finds nothing to do. `None` derives the bound from the input size
    /// (see [`CanonOptions::pass_limit`]).
    pub max_passes: Option<usize>,
    /// Rewrites a single node may take beyond the length of its right
    /// child's right spine before stabilization is abandoned.
    pub node_rewrite_slack: usize,
}

impl Default for CanonOptions {
    fn default() -> Self {
        CanonOptions {
            max_passes: None,
            node_rewrite_slack: 2,
        }
    }
}

impl CanonOptions {
    /// Pass bound for `tree`: [`CanonOptions::max_passes`] if set,
    /// otherwise `2 * internal_count + 8`.
    pub fn pass_limit(&self, tree: &BoolTree) -> usize {
        self.max_passes
            .unwrap_or_else(|| tree.internal_count().saturating_mul(2).saturating_add(8))
    }
}

/// What a canonicalization did.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CanonStats {
    /// Whole-tree passes run, including the last (empty) one.
    pub passes: usize,
    /// Total rewrites applied.
    pub rewrites: usize,
    by_rule: [usize; 9],
}

impl CanonStats {
    /// How often `rule` was applied.
    pub fn rule_count(&self, rule: RuleId) -> usize {
        self.by_rule[rule.index()]
    }

    fn record(&mut self, rule: RuleId) {
        self.rewrites += 1;
        self.by_rule[rule.index()] += 1;
    }
}

/// Rewrites trees into GIFT-Boolean form.
#[derive(Clone, Debug, Default)]
pub struct Canonicalizer {
    options: CanonOptions,
}

impl Canonicalizer {
    pub fn new(options: CanonOptions) -> Self {
        Canonicalizer { options }
    }

    pub fn options(&self) -> &CanonOptions {
        &self.options
    }

    /// Rewrite `root` into GIFT-Boolean form.
    ///
    /// Runs [`Canonicalizer::canonicalize_once`] passes until one performs
    /// no rewrite. The work is done on a copy; `root` is replaced only on
    /// success, so on error the caller's tree is unchanged. A tree that is
    /// already canonical keeps its nodes.
    pub fn canonicalize(&self, root: &mut BoolTree) -> Result<CanonStats, CanonError> {
        root.check_well_formed()?;

        let limit = self.options.pass_limit(root);
        let mut work = root.duplicate();
        let mut stats = CanonStats::default();

        loop {
            if stats.passes == limit {
                return Err(CanonError::InternalInvariantViolation {
                    reason: format!("no fixpoint after {limit} passes"),
                });
            }
            stats.passes += 1;
            let rewrites = self.pass(&mut work, &mut stats)?;
            debug!(pass = stats.passes, rewrites, "canonicalization pass");
            if rewrites == 0 {
                break;
            }
        }

        debug!(
            passes = stats.passes,
            rewrites = stats.rewrites,
            depth = work.depth(),
            "canonicalized tree",
        );
        if stats.rewrites > 0 {
            *root = work;
        }
        Ok(stats)
    }

    /// One top-down pass: stabilize `node`, then its (possibly new)
    /// children. Returns the number of rewrites.
    ///
    /// A failed pass may leave `node` partly rewritten.
    pub fn canonicalize_once(&self, node: &mut BoolTree) -> Result<usize, CanonError> {
        self.pass(node, &mut CanonStats::default())
    }

    /// Rewrite `node` until no rule matches it. Children are not visited.
    pub fn stabilize_node(&self, node: &mut BoolTree) -> Result<usize, CanonError> {
        self.stabilize(node, &mut CanonStats::default())
    }

    fn pass(&self, node: &mut BoolTree, stats: &mut CanonStats) -> Result<usize, CanonError> {
        ensure_sufficient_stack(|| {
            let mut rewrites = self.stabilize(node, stats)?;
            if let BoolTree::Internal { left, right, .. } = node {
                rewrites += self.pass(left, stats)?;
                rewrites += self.pass(right, stats)?;
            }
            Ok(rewrites)
        })
    }

    fn stabilize(&self, node: &mut BoolTree, stats: &mut CanonStats) -> Result<usize, CanonError> {
        let budget = right_spine_len(node) + self.options.node_rewrite_slack;
        let mut rewrites = 0;
        while let Some(rule) = find_rewrite(node)? {
            if rewrites == budget {
                return Err(CanonError::InternalInvariantViolation {
                    reason: format!("node still matches {rule} after {budget} rewrites"),
                });
            }
            apply_rewrite(node, rule)?;
            stats.record(rule);
            rewrites += 1;
        }
        Ok(rewrites)
    }
}

/// Internal nodes on the right spine of `node`'s right child.
fn right_spine_len(node: &BoolTree) -> usize {
    let mut len = 0;
    let mut cur = node.right();
    while let Some(BoolTree::Internal { right, .. }) = cur {
        len += 1;
        cur = Some(right.as_ref());
    }
    len
}

/// [`Canonicalizer::stabilize_node`] with default options.
pub fn stabilize_node(node: &mut BoolTree) -> Result<usize, CanonError> {
    Canonicalizer::default().stabilize_node(node)
}

/// [`Canonicalizer::canonicalize_once`] with default options.
pub fn canonicalize_once(node: &mut BoolTree) -> Result<usize, CanonError> {
    Canonicalizer::default().canonicalize_once(node)
}

/// [`Canonicalizer::canonicalize`] with default options. Returns the total
/// number of rewrites.
pub fn canonicalize(root: &mut BoolTree) -> Result<usize, CanonError> {
    Canonicalizer::default()
        .canonicalize(root)
        .map(|stats| stats.rewrites)
}

#[cfg(test)]
mod tests;
