//! Branching growth driven by a small L-system.
//!
//! A grammar is expanded once into an immutable symbol program; each tick
//! the tree consumes one symbol with a turtle that draws round-capped
//! strokes into the overlay.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_8};
use std::sync::OnceLock;

use super::overlay::Overlay;
use super::Progress;
use crate::core::random::RandStream;
use crate::elements::{MaterialId, EL_BRANCH, EL_LEAF};

const EXPANSION_ROUNDS: usize = 4;
const DEFAULT_BRANCH_LENGTH: f32 = 10.0;
/// Stream roll below which the standard tree is chosen outright
const STANDARD_TREE_ODDS: u8 = 62;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeGrammar {
    /// `X -> F[-X][+X]`
    Standard,
    /// `F -> FF`, then `X -> F-[[X]+X]+F[+FX]-X`
    Leaning,
    /// `F -> [+F]F[-F]F`
    Jungle,
}

impl TreeGrammar {
    pub const ALL: [TreeGrammar; 3] = [TreeGrammar::Standard, TreeGrammar::Leaning, TreeGrammar::Jungle];

    fn axiom(self) -> &'static [u8] {
        match self {
            TreeGrammar::Standard | TreeGrammar::Leaning => b"X",
            TreeGrammar::Jungle => b"F",
        }
    }

    /// Rewrite rules, applied one after another within a round.
    fn rules(self) -> &'static [(u8, &'static [u8])] {
        match self {
            TreeGrammar::Standard => &[(b'X', b"F[-X][+X]")],
            TreeGrammar::Leaning => &[(b'F', b"FF"), (b'X', b"F-[[X]+X]+F[+FX]-X")],
            TreeGrammar::Jungle => &[(b'F', b"[+F]F[-F]F")],
        }
    }

    pub fn branch_length(self) -> f32 {
        match self {
            TreeGrammar::Standard => DEFAULT_BRANCH_LENGTH,
            TreeGrammar::Leaning => 2.0,
            TreeGrammar::Jungle => 5.0,
        }
    }

    pub fn expand(self) -> Vec<u8> {
        let mut program = self.axiom().to_vec();
        for _ in 0..EXPANSION_ROUNDS {
            for &(symbol, replacement) in self.rules() {
                let mut next = Vec::with_capacity(program.len() * 2);
                for &s in &program {
                    if s == symbol {
                        next.extend_from_slice(replacement);
                    } else {
                        next.push(s);
                    }
                }
                program = next;
            }
        }
        program
    }

    /// Expanded program, generated on first use and shared by every tree.
    pub fn program(self) -> &'static [u8] {
        static PROGRAMS: OnceLock<[Vec<u8>; 3]> = OnceLock::new();
        let programs = PROGRAMS.get_or_init(|| TreeGrammar::ALL.map(TreeGrammar::expand));
        &programs[self as usize]
    }

    /// Weighted pick: the standard tree is far more common.
    pub fn pick(rng: &mut RandStream) -> Self {
        if rng.roll() < STANDARD_TREE_ODDS {
            TreeGrammar::Standard
        } else {
            TreeGrammar::ALL[rng.index(TreeGrammar::ALL.len())]
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Turtle {
    x: f32,
    y: f32,
    angle: f32,
}

#[derive(Clone, Debug)]
pub struct TreeGrowth {
    pub grammar: TreeGrammar,
    program: &'static [u8],
    cursor: usize,
    angle: f32,
    pub width: f32,
    branch_length: f32,
    stack: Vec<Turtle>,
}

impl TreeGrowth {
    pub fn new(rng: &mut RandStream) -> Self {
        let width = (rng.unit() * 4.0).floor() as f32 + 2.0;
        Self::with_grammar(TreeGrammar::pick(rng), width)
    }

    pub fn with_grammar(grammar: TreeGrammar, width: f32) -> Self {
        Self {
            grammar,
            program: grammar.program(),
            cursor: 0,
            angle: -FRAC_PI_2,
            width,
            branch_length: grammar.branch_length(),
            stack: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.program.len() - self.cursor
    }

    /// Consume one symbol. `x`, `y` and `color` belong to the owning particle.
    pub fn act(&mut self, x: &mut f32, y: &mut f32, color: &mut MaterialId, overlay: &mut Overlay) -> Progress {
        let program = self.program;
        let rest = &program[self.cursor..];
        let Some(&symbol) = rest.first() else {
            return Progress::Finished;
        };

        // tips and the last stroke before a pop are leaves
        if rest.len() == 1 || rest.get(1) == Some(&b']') {
            *color = EL_LEAF;
        } else if *color == EL_LEAF {
            *color = EL_BRANCH;
        }

        match symbol {
            b'F' | b'X' => {
                let step = self.branch_length * (self.width / 3.0);
                let nx = *x + step * self.angle.cos();
                let ny = *y + step * self.angle.sin();
                overlay.stroke_segment(*x, *y, nx, ny, self.width, *color);
                *x = nx;
                *y = ny;
            }
            b'+' => self.angle += FRAC_PI_8,
            b'-' => self.angle -= FRAC_PI_8,
            b'[' => self.stack.push(Turtle { x: *x, y: *y, angle: self.angle }),
            b']' => {
                if let Some(t) = self.stack.pop() {
                    *x = t.x;
                    *y = t.y;
                    self.angle = t.angle;
                }
            }
            _ => {}
        }

        self.cursor += 1;
        if self.cursor == self.program.len() {
            Progress::Finished
        } else {
            Progress::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_grammar_expands_recursively() {
        // each round adds 8 symbols per X and doubles the X count: 1, 9, 25, 57, 121
        assert_eq!(TreeGrammar::Standard.expand().len(), 121);
        assert!(TreeGrammar::Standard.program().starts_with(b"F[-F[-F[-F[-X][+X]"));
    }

    #[test]
    fn leaning_grammar_doubles_trunks_before_branching() {
        let p = TreeGrammar::Leaning.program();
        // round 1 leaves one F; rounds 2..4 double it to eight
        assert!(p.starts_with(b"FFFFFFFF-"));
    }

    #[test]
    fn brackets_are_balanced_in_every_program() {
        for g in TreeGrammar::ALL {
            let mut depth = 0i32;
            for &s in g.program() {
                match s {
                    b'[' => depth += 1,
                    b']' => depth -= 1,
                    _ => {}
                }
                assert!(depth >= 0);
            }
            assert_eq!(depth, 0, "{g:?}");
        }
    }

    #[test]
    fn growth_retires_after_exactly_one_tick_per_symbol() {
        for g in TreeGrammar::ALL {
            let mut overlay = Overlay::new(256, 256);
            let mut tree = TreeGrowth::with_grammar(g, 2.0);
            let (mut x, mut y, mut color) = (128.5, 250.5, EL_BRANCH);
            let len = g.program().len();
            let mut ticks = 0;
            while tree.act(&mut x, &mut y, &mut color, &mut overlay) == Progress::Continue {
                ticks += 1;
                assert!(ticks < len);
            }
            assert_eq!(ticks + 1, len);
            assert_eq!(tree.remaining(), 0);
        }
    }

    #[test]
    fn segments_before_a_pop_are_leaves() {
        let mut overlay = Overlay::new(64, 64);
        let mut tree = TreeGrowth::with_grammar(TreeGrammar::Standard, 2.0);
        let (mut x, mut y, mut color) = (32.5, 60.5, EL_BRANCH);
        let program = tree.program;
        for k in 0..program.len() {
            tree.act(&mut x, &mut y, &mut color, &mut overlay);
            let leafy = k + 1 == program.len() || program.get(k + 1) == Some(&b']');
            assert_eq!(color == EL_LEAF, leafy, "symbol {k}");
        }
    }

    #[test]
    fn pick_prefers_the_standard_tree() {
        let mut rng = RandStream::constant(0, 3);
        assert_eq!(TreeGrammar::pick(&mut rng), TreeGrammar::Standard);
    }
}
