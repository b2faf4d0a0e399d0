use rover::{Heading, Rover, RoverError};

fn rover() -> Rover {
    Rover::new("(4, 2, EAST)", None).unwrap()
}

fn execute(rover: &mut Rover, commands: &str, expected: &str) {
    rover.execute(commands).unwrap();
    assert_eq!(rover.output(), expected, "after {commands:?}");
}

#[test]
fn reports_landing() {
    assert_eq!(rover().output(), "(4, 2) EAST");
}

#[test]
fn moves_forward_in_every_heading() {
    let mut rover = rover();
    execute(&mut rover, "F", "(5, 2) EAST");

    rover.set_direction(Heading::South);
    execute(&mut rover, "F", "(5, 1) SOUTH");

    rover.set_direction(Heading::West);
    execute(&mut rover, "F", "(4, 1) WEST");

    rover.set_direction(Heading::North);
    execute(&mut rover, "F", "(4, 2) NORTH");
}

#[test]
fn moves_backward_in_every_heading() {
    let mut rover = rover();
    execute(&mut rover, "B", "(3, 2) EAST");

    rover.set_direction(Heading::South);
    execute(&mut rover, "B", "(3, 3) SOUTH");

    rover.set_direction(Heading::West);
    execute(&mut rover, "B", "(4, 3) WEST");

    rover.set_direction(Heading::North);
    execute(&mut rover, "B", "(4, 2) NORTH");
}

#[test]
fn turns_right_around_the_compass() {
    let mut rover = rover();
    execute(&mut rover, "R", "(4, 2) SOUTH");
    execute(&mut rover, "R", "(4, 2) WEST");
    execute(&mut rover, "R", "(4, 2) NORTH");
    execute(&mut rover, "R", "(4, 2) EAST");
}

#[test]
fn turns_left_around_the_compass() {
    let mut rover = rover();
    execute(&mut rover, "L", "(4, 2) NORTH");
    execute(&mut rover, "L", "(4, 2) WEST");
    execute(&mut rover, "L", "(4, 2) SOUTH");
    execute(&mut rover, "L", "(4, 2) EAST");
}

#[test]
fn runs_full_command() {
    execute(&mut rover(), "FLFFFRFLB", "(6, 4) NORTH");
}

#[test]
fn stops_before_obstacle() {
    let mut rover = rover();
    rover.set_obstacles("[[1,4], [3,5], [7,4], [6,5]]").unwrap();
    execute(&mut rover, "FLFFFRFLB", "(5, 5) EAST STOPPED");
}

#[test]
fn rejects_bad_landing() {
    for landing in ["(4, EAST)", "(a, 2, EAST)", "(4, 2, NOWHERE)", "4, 2, EAST"] {
        let err = Rover::new(landing, None).unwrap_err();
        assert!(
            matches!(err, RoverError::InvalidInitialization { .. }),
            "{landing}: {err}"
        );
    }
}

#[test]
fn bad_command_is_all_or_nothing() {
    let mut rover = rover();
    let err = rover.execute("FFRB?F").unwrap_err();
    assert!(matches!(
        err,
        RoverError::InvalidCommand {
            symbol: '?',
            position: 4
        }
    ));
    assert_eq!(rover.output(), "(4, 2) EAST");
}
