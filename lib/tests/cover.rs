use lifestable_lib::{Config, Cover, Error};
use pretty_assertions::assert_eq;
use std::error::Error as StdError;

const SMALL_COVER: &str = "\
.i 9
.o 9
000000000 110111110
000000001 110011110
100000001 110111110
000010000 111011110
010010000 111111111
.e
";

#[test]
fn parse() -> Result<(), Box<dyn StdError>> {
    let cover: Cover = "\
# generated
.i 9
.o 9
.ilb stateunk stateon on2 on1 on0 unk3 unk2 unk1 unk0
.ob live2 live3 dead0 dead1 dead2 dead4 dead5 dead6 abort
.p 2
-1------- 100000000
0-1------ 000000001
.e
"
    .parse()?;
    assert_eq!(cover.num_inputs(), 9);
    assert_eq!(cover.num_outputs(), 9);
    assert_eq!(cover.cubes().len(), 2);
    let cube = &cover.cubes()[0];
    assert_eq!(cube.inputs[0], None);
    assert_eq!(cube.inputs[1], Some(true));
    assert_eq!(cube.outputs[0], true);
    assert_eq!(cube.outputs[1], false);
    Ok(())
}

#[test]
fn eval() -> Result<(), Box<dyn StdError>> {
    let cover: Cover = ".i 3\n.o 2\n1-0 10\n-11 11\n".parse()?;
    assert_eq!(cover.eval(&[true, true, false]), vec![true, false]);
    assert_eq!(cover.eval(&[false, true, true]), vec![true, true]);
    assert_eq!(cover.eval(&[false, false, false]), vec![false, false]);
    Ok(())
}

#[test]
fn verify_small_table() -> Result<(), Box<dyn StdError>> {
    let table = Config::new(1, 1).table()?;
    let cover: Cover = SMALL_COVER.parse()?;
    cover.verify(&table)?;
    Ok(())
}

#[test]
fn verify_reports_first_mismatch() -> Result<(), Box<dyn StdError>> {
    let table = Config::new(1, 1).table()?;
    let cover: Cover = SMALL_COVER.replace("000000000 110111110\n", "").parse()?;
    assert_eq!(
        cover.verify(&table),
        Err(Error::CoverMismatch {
            row: 0,
            inputs: String::from("000000000"),
            output: 0,
        })
    );

    let cover: Cover = SMALL_COVER
        .replace("000010000 111011110", "000010000 111111110")
        .parse()?;
    assert_eq!(
        cover.verify(&table),
        Err(Error::CoverMismatch {
            row: 3,
            inputs: String::from("000010000"),
            output: 3,
        })
    );
    Ok(())
}

#[test]
fn verify_checks_widths() -> Result<(), Box<dyn StdError>> {
    let table = Config::new(1, 1).table()?;
    let cover: Cover = ".i 3\n.o 2\n1-0 10\n".parse()?;
    assert_eq!(cover.verify(&table), Err(Error::WidthMismatch(3, 2, 9, 9)));
    Ok(())
}

#[test]
fn table_is_its_own_cover() -> Result<(), Box<dyn StdError>> {
    let table = Config::default().table()?;
    let cover: Cover = table.to_string().parse()?;
    assert_eq!(cover.cubes().len(), table.len());
    cover.verify(&table)?;
    Ok(())
}

#[test]
fn render_bitwise() -> Result<(), Box<dyn StdError>> {
    let cover: Cover = "\
.i 9
.o 9
-1------- 100000000
0-1------ 000000001
--------- 010000000
11------- 000000001
"
    .parse()?;
    assert_eq!(
        cover.render_bitwise(),
        "live2 |= stateon ;\n\
         live3 |= ~0 ;\n\
         abort |= (~stateunk) & on2 ;\n\
         abort |= stateunk & stateon ;\n"
    );
    Ok(())
}

#[test]
fn render_with_own_labels() -> Result<(), Box<dyn StdError>> {
    let cover: Cover = ".i 2\n.o 1\n.ilb a b\n.ob f\n10 1\n".parse()?;
    assert_eq!(cover.render_bitwise(), "f |= a & (~b) ;\n");

    let cover: Cover = ".i 2\n.o 1\n01 1\n".parse()?;
    assert_eq!(cover.render_bitwise(), "y0 |= (~x0) & x1 ;\n");
    Ok(())
}

#[test]
fn parse_errors() {
    assert_eq!(
        "000 1\n".parse::<Cover>(),
        Err(Error::ParsePla {
            line: 1,
            reason: String::from("cube before `.i` and `.o`"),
        })
    );
    assert_eq!(
        ".i 3\n.o 1\n00 1\n".parse::<Cover>(),
        Err(Error::ParsePla {
            line: 3,
            reason: String::from("wrong number of inputs"),
        })
    );
    assert_eq!(
        ".i 3\n.o 1\n0x0 1\n".parse::<Cover>(),
        Err(Error::ParsePla {
            line: 3,
            reason: String::from("invalid input literal `x`"),
        })
    );
    assert_eq!(
        ".i three\n".parse::<Cover>(),
        Err(Error::ParsePla {
            line: 1,
            reason: String::from("invalid number `three`"),
        })
    );
    assert_eq!(
        ".i 1\n.o 1\n.p 2\n1 1\n".parse::<Cover>(),
        Err(Error::ParsePla {
            line: 4,
            reason: String::from("`.p` declares 2 cubes, found 1"),
        })
    );
    assert_eq!(
        ".o 1\n".parse::<Cover>(),
        Err(Error::ParsePla {
            line: 1,
            reason: String::from("missing `.i`"),
        })
    );
}

#[test]
fn display() -> Result<(), Box<dyn StdError>> {
    let text = ".i 2\n.o 1\n.ilb a b\n.ob f\n.p 2\n1- 1\n01 1\n.e\n";
    let cover: Cover = text.parse()?;
    assert_eq!(cover.to_string(), text);
    Ok(())
}
