//! Integration tests for command dispatch and the stack machine.

use quire::foundation::{Error, Token, Value, ValueType};
use quire::language::{CommandSet, Machine, Overload, Pattern, parse};

// =============================================================================
// Command Dispatch
// =============================================================================

#[test]
fn numeric_overload() {
    let mut stack = vec![Value::Number(3.0), Value::Number(4.0)];
    CommandSet::standard().dispatch('+', &mut stack).unwrap();
    assert_eq!(stack, vec![Value::Number(7.0)]);
}

#[test]
fn mixed_overload_stringifies_the_right_operand() {
    let mut stack = vec![Value::from("ab"), Value::Number(3.0)];
    CommandSet::standard().dispatch('+', &mut stack).unwrap();
    assert_eq!(stack, vec![Value::from("ab3.0")]);
}

#[test]
fn mixed_overload_stringifies_the_left_operand() {
    let mut stack = vec![Value::Number(4.0), Value::from("cd")];
    CommandSet::standard().dispatch('+', &mut stack).unwrap();
    assert_eq!(stack, vec![Value::from("4.0cd")]);
}

#[test]
fn unknown_command_regardless_of_stack() {
    for stack in [vec![], vec![Value::Number(1.0), Value::Number(2.0)]] {
        let mut stack = stack;
        assert_eq!(
            CommandSet::standard().dispatch('Z', &mut stack),
            Err(Error::UnknownCommand { label: 'Z' })
        );
    }
}

#[test]
fn overload_mismatch_reports_observed_tags() {
    let mut stack = vec![Value::Number(1.0), Value::Block(vec![])];
    assert_eq!(
        CommandSet::standard().dispatch('+', &mut stack),
        Err(Error::NoMatchingOverload {
            label: '+',
            operands: vec![ValueType::Number, ValueType::Block],
        })
    );
}

#[test]
fn custom_commands_extend_the_registry() {
    let mut commands = CommandSet::standard();
    commands.register(
        'n',
        Overload::new(vec![Pattern::Num], |operands| {
            match operands.first().and_then(Value::as_number) {
                Some(n) => Ok(Value::Number(-n)),
                None => unreachable!("pattern guarantees a number"),
            }
        }),
    );

    let machine = Machine::with_commands(commands);
    let tokens = parse("5n").unwrap();
    assert_eq!(machine.run(&tokens).unwrap(), vec![Value::Number(-5.0)]);
}

// =============================================================================
// Executor
// =============================================================================

#[test]
fn literals_and_dispatch() {
    let machine = Machine::new();
    let tokens = parse("3\"x\"+").unwrap();
    assert_eq!(machine.run(&tokens).unwrap(), vec![Value::from("3.0x")]);
}

#[test]
fn block_is_a_noop_around_the_stack() {
    let machine = Machine::new();

    let without = machine.run(&parse("1\"a\"").unwrap()).unwrap();
    let with = machine.run(&parse("1W9+9}\"a\"").unwrap()).unwrap();
    assert_eq!(without, with);
}

#[test]
fn unknown_block_type_for_unhandled_kinds() {
    let machine = Machine::new();
    let tokens = parse("[1}").unwrap();
    assert_eq!(
        machine.run(&tokens),
        Err(Error::UnknownBlockType { kind: '[' })
    );
}

#[test]
fn literal_handler_can_push_quoted_code() {
    fn push_quoted(_m: &Machine, body: &[Token], stack: &mut Vec<Value>) -> quire::foundation::Result<()> {
        stack.push(Value::Block(body.to_vec()));
        Ok(())
    }

    let mut machine = Machine::new();
    machine.register_block_handler(quire::foundation::BlockKind::Literal, push_quoted);

    let tokens = parse("[1+}").unwrap();
    let stack = machine.run(&tokens).unwrap();
    assert_eq!(
        stack,
        vec![Value::Block(vec![Token::Number(1.0), Token::Symbol('+')])]
    );
}

#[test]
fn run_owns_a_fresh_stack_per_call() {
    let machine = Machine::new();
    let tokens = parse("1").unwrap();
    assert_eq!(machine.run(&tokens).unwrap(), vec![Value::Number(1.0)]);
    assert_eq!(machine.run(&tokens).unwrap(), vec![Value::Number(1.0)]);
}

#[test]
fn run_on_threads_a_caller_stack() {
    let machine = Machine::new();
    let mut stack = vec![Value::Number(40.0)];
    machine
        .run_on(&parse("2+").unwrap(), &mut stack)
        .unwrap();
    assert_eq!(stack, vec![Value::Number(42.0)]);
}
