// ABOUTME: Lazily evaluated spring expressions for one geometric edge.
// ABOUTME: Springs are constants, or the max or sum of two other springs.

use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

/// A symbolic edge value.
///
/// Springs are immutable and share their operands, so a spring can only ever
/// reference springs that existed before it: the expression graph is acyclic
/// by construction. The value is computed on first read and cached in the
/// node. Springs are `!Send`; a layout is solved on the thread that owns it.
#[derive(Clone)]
pub struct Spring(Rc<Node>);

struct Node {
    kind: Kind,
    value: OnceCell<i32>,
}

enum Kind {
    Constant(i32),
    Max(Spring, Spring),
    Sum(Spring, Spring),
}

impl Kind {
    fn combine(&self, a: i32, b: i32) -> i32 {
        match self {
            Kind::Constant(v) => *v,
            Kind::Max(..) => a.max(b),
            Kind::Sum(..) => a.saturating_add(b),
        }
    }

    /// Move the operands out, leaving a constant behind
    fn detach(&mut self, out: &mut Vec<Spring>) {
        if let Kind::Max(a, b) | Kind::Sum(a, b) = std::mem::replace(self, Kind::Constant(0)) {
            out.push(a);
            out.push(b);
        }
    }
}

// Chains are released iteratively; the derived drop would recurse per link.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.kind.detach(&mut pending);
        while let Some(spring) = pending.pop() {
            if let Ok(mut node) = Rc::try_unwrap(spring.0) {
                node.kind.detach(&mut pending);
            }
        }
    }
}

impl Spring {
    fn from_kind(kind: Kind) -> Self {
        Self(Rc::new(Node {
            kind,
            value: OnceCell::new(),
        }))
    }

    pub fn constant(value: i32) -> Self {
        Self::from_kind(Kind::Constant(value))
    }

    pub fn zero() -> Self {
        Self::constant(0)
    }

    pub fn max(a: Spring, b: Spring) -> Self {
        Self::from_kind(Kind::Max(a, b))
    }

    pub fn sum(a: Spring, b: Spring) -> Self {
        Self::from_kind(Kind::Sum(a, b))
    }

    /// Evaluate to pixels. Sums saturate instead of overflowing.
    ///
    /// Position chains grow with the grid, so operands are walked with an
    /// explicit stack rather than by recursion.
    pub fn value(&self) -> i32 {
        if let Some(&value) = self.0.value.get() {
            return value;
        }

        let mut stack: Vec<&Spring> = vec![self];
        while let Some(&top) = stack.last() {
            if top.0.value.get().is_some() {
                stack.pop();
                continue;
            }
            let value = match &top.0.kind {
                Kind::Constant(v) => Some(*v),
                Kind::Max(a, b) | Kind::Sum(a, b) => match (a.0.value.get(), b.0.value.get()) {
                    (Some(&x), Some(&y)) => Some(top.0.kind.combine(x, y)),
                    (left, right) => {
                        if left.is_none() {
                            stack.push(a);
                        }
                        if right.is_none() {
                            stack.push(b);
                        }
                        None
                    }
                },
            };
            if let Some(value) = value {
                let _ = top.0.value.set(value);
                stack.pop();
            }
        }

        self.0.value.get().copied().unwrap_or_default()
    }

    /// Fold springs with pairwise `max`, or `None` if there are none.
    ///
    /// Operands are paired level by level so the resulting expression stays
    /// shallow for large groups.
    pub fn fold_max<I>(springs: I) -> Option<Spring>
    where
        I: IntoIterator<Item = Spring>,
    {
        let mut level: Vec<Spring> = springs.into_iter().collect();
        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len().div_ceil(2));
            let mut iter = level.into_iter();
            while let Some(a) = iter.next() {
                match iter.next() {
                    Some(b) => next.push(Spring::max(a, b)),
                    None => next.push(a),
                }
            }
            level = next;
        }
        level.pop()
    }
}

impl From<i32> for Spring {
    fn from(value: i32) -> Self {
        Spring::constant(value)
    }
}

/// Nesting shown by `Debug` before operands are elided
const DEBUG_DEPTH: usize = 8;

impl Spring {
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        match &self.0.kind {
            Kind::Constant(v) => write!(f, "{v}"),
            _ if depth == 0 => write!(f, ".."),
            Kind::Max(a, b) => {
                write!(f, "max(")?;
                a.fmt_nested(f, depth - 1)?;
                write!(f, ", ")?;
                b.fmt_nested(f, depth - 1)?;
                write!(f, ")")
            }
            Kind::Sum(a, b) => {
                write!(f, "(")?;
                a.fmt_nested(f, depth - 1)?;
                write!(f, " + ")?;
                b.fmt_nested(f, depth - 1)?;
                write!(f, ")")
            }
        }
    }
}

impl fmt::Debug for Spring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_nested(f, DEBUG_DEPTH)
    }
}
