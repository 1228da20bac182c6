// Property tests: random navigation never breaks the board

use hanoi::navigator::Navigator;
use hanoi::solver::Peg;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Forward,
    Backward,
    Reset,
    JumpTo(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Forward),
        3 => Just(Op::Backward),
        1 => Just(Op::Reset),
        2 => any::<usize>().prop_map(Op::JumpTo),
    ]
}

fn run(nav: &mut Navigator, op: &Op) {
    match op {
        Op::Forward => {
            nav.step_forward();
        }
        Op::Backward => {
            nav.step_backward();
        }
        Op::Reset => nav.reset(),
        Op::JumpTo(raw) => {
            let target = raw % (nav.max_step() + 1);
            nav.move_to_step(target).unwrap();
        }
    }
}

/// Board reached by resetting and stepping forward `steps` times
fn replayed(disks: u32, steps: usize) -> Navigator {
    let mut nav = Navigator::new(disks).unwrap();
    for _ in 0..steps {
        nav.step_forward();
    }
    nav
}

proptest! {
    /// Every disk stays on exactly one peg and no disk rests on a smaller one.
    #[test]
    fn board_stays_legal(
        disks in 1u32..=7,
        ops in proptest::collection::vec(op_strategy(), 0..60),
    ) {
        let mut nav = Navigator::new(disks).unwrap();
        for op in &ops {
            run(&mut nav, op);
            prop_assert!(nav.towers().validate().is_ok(), "{:?}", nav.towers().validate());
            prop_assert!(nav.current_step() <= nav.max_step());
        }
    }

    /// Any reachable state equals a fresh replay of the same number of moves.
    #[test]
    fn state_matches_replay_from_start(
        disks in 1u32..=6,
        ops in proptest::collection::vec(op_strategy(), 0..40),
    ) {
        let mut nav = Navigator::new(disks).unwrap();
        for op in &ops {
            run(&mut nav, op);
        }
        let expected = replayed(disks, nav.current_step());
        prop_assert_eq!(nav.towers(), expected.towers());
    }

    /// Jumping from an arbitrary state lands on the replayed state.
    #[test]
    fn jump_equivalence(disks in 1u32..=8, from in any::<usize>(), to in any::<usize>()) {
        let mut nav = Navigator::new(disks).unwrap();
        let from = from % (nav.max_step() + 1);
        let to = to % (nav.max_step() + 1);

        nav.move_to_step(from).unwrap();
        nav.move_to_step(to).unwrap();

        let expected = replayed(disks, to);
        prop_assert_eq!(nav.current_step(), to);
        prop_assert_eq!(nav.towers(), expected.towers());
    }

    /// Forward then backward restores the exact prior state.
    #[test]
    fn forward_backward_round_trip(disks in 1u32..=8, at in any::<usize>()) {
        let mut nav = Navigator::new(disks).unwrap();
        let at = at % nav.max_step();
        nav.move_to_step(at).unwrap();
        let before = nav.towers().clone();

        prop_assert!(nav.step_forward());
        prop_assert!(nav.step_backward());
        prop_assert_eq!(nav.current_step(), at);
        prop_assert_eq!(nav.towers(), &before);
    }

    /// A full forward replay always ends with every disk on C, in order.
    #[test]
    fn full_replay_solves(disks in 1u32..=10) {
        let nav = replayed(disks, (1usize << disks) - 1);
        let expected: Vec<u32> = (0..disks).rev().collect();

        prop_assert!(nav.is_at_end());
        prop_assert_eq!(nav.peg(Peg::C), expected.as_slice());
        prop_assert!(nav.peg(Peg::A).is_empty());
        prop_assert!(nav.peg(Peg::B).is_empty());
    }
}
