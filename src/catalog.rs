//! The demonstration catalogue: every section the runner knows about, in
//! declaration order. Each demonstration is a pure function of constants, so
//! rendering the catalogue any number of times produces identical output.

use crate::{
    diagnostics::Result,
    numeric,
    runner::{Demo, Section},
    sequence::{Array, Slice},
    template::sprintf,
    value::Value,
};

pub fn install() -> Vec<Section> {
    vec![
        Section::new("Hello", vec![Demo::new("greeting", hello_greeting)]),
        Section::new(
            "Variables",
            vec![
                Demo::new("strings declare and reassign", variables_strings),
                Demo::new("ints declare three ways", variables_ints),
            ],
        ),
        Section::new(
            "Bits & Memory",
            vec![Demo::new("fixed-width integers", bits_fixed_width)],
        ),
        Section::new(
            "Floats",
            vec![Demo::new("precision and inference", floats_precision)],
        ),
        Section::new(
            "Formatting",
            vec![
                Demo::new("default, quoted, and type verbs", formatting_verbs),
                Demo::new("fixed-point precision", formatting_fixed_point),
            ],
        ),
        Section::new(
            "Arrays",
            vec![Demo::new("fixed-length ages", arrays_fixed_length)],
        ),
        Section::new(
            "Slices",
            vec![
                Demo::new("update and append", slices_update_append),
                Demo::new("half-open ranges", slices_ranges),
                Demo::new("append aliasing", slices_aliasing),
            ],
        ),
        Section::new(
            "Strings",
            vec![Demo::new("search and transform", strings_utilities)],
        ),
        Section::new(
            "Sorting",
            vec![
                Demo::new("ints", sorting_ints),
                Demo::new("strings", sorting_strings),
            ],
        ),
    ]
}

fn ints(slice: &Slice<i64>) -> Value {
    Value::ints(slice.to_vec())
}

fn strs(slice: &Slice<&'static str>) -> Value {
    Value::strs(slice.to_vec())
}

fn hello_greeting() -> Result<Vec<String>> {
    Ok(vec!["Hello, ninjas!".into()])
}

fn variables_strings() -> Result<Vec<String>> {
    let name_one = "mario";
    let name_two = "luigi";
    let name_three = ""; // declared but not yet given a value

    let mut lines = vec![sprintf(
        "%v %v %q",
        &[
            Value::str(name_one),
            Value::str(name_two),
            Value::str(name_three),
        ],
    )?];

    let name_one = "peach";
    let name_three = "bowser";
    lines.push(sprintf(
        "%v %v %v",
        &[
            Value::str(name_one),
            Value::str(name_two),
            Value::str(name_three),
        ],
    )?);

    let name_four = "yoshi";
    lines.push(sprintf("%v", &[Value::str(name_four)])?);
    Ok(lines)
}

fn variables_ints() -> Result<Vec<String>> {
    let age_one: i64 = 20;
    let age_two = 30;
    let age_three = 40;
    Ok(vec![sprintf(
        "%v %v %v",
        &[
            Value::int(age_one),
            Value::int(age_two),
            Value::int(age_three),
        ],
    )?])
}

fn bits_fixed_width() -> Result<Vec<String>> {
    let num_one = numeric::int8(25);
    let num_two = numeric::int8(128); // wraps: 128 does not fit in 8 bits
    let num_three = numeric::uint(25)?; // a negative literal here would end the run
    Ok(vec![
        sprintf("%v %T", &[Value::int8(num_one), Value::int8(num_one)])?,
        sprintf("int8 literal 128 wraps to %v", &[Value::int8(num_two)])?,
        sprintf(
            "127 + 1 wraps to %v",
            &[Value::int8(i8::MAX.wrapping_add(1))],
        )?,
        sprintf("%v %T", &[Value::uint(num_three), Value::uint(num_three)])?,
    ])
}

fn floats_precision() -> Result<Vec<String>> {
    let score_one = numeric::float32(25.98);
    let score_two: f64 = 1_965_385_877.5;
    let score_three = 1.5; // inferred as the wide float type
    Ok(vec![
        sprintf(
            "%v %T",
            &[Value::float32(score_one), Value::float32(score_one)],
        )?,
        sprintf(
            "%v %T",
            &[Value::float64(score_two), Value::float64(score_two)],
        )?,
        sprintf(
            "%v %T",
            &[Value::float64(score_three), Value::float64(score_three)],
        )?,
    ])
}

fn formatting_verbs() -> Result<Vec<String>> {
    let name = Value::str("Maria");
    let age = Value::int(10);
    Ok(vec![
        sprintf(
            "my name is %v and my age is %v",
            &[name.clone(), age.clone()],
        )?,
        sprintf(
            "my name is %q and my age is %q",
            &[name.clone(), age.clone()],
        )?,
        sprintf("age is of type %T", &[age])?,
    ])
}

fn formatting_fixed_point() -> Result<Vec<String>> {
    let score = Value::float64(225.55);
    Ok(vec![
        sprintf("you scored %f points", &[score.clone()])?,
        sprintf("you scored %0.1f points", &[score])?,
    ])
}

fn arrays_fixed_length() -> Result<Vec<String>> {
    let mut ages = Array::from_vec(vec![20_i64, 25, 30]);
    let mut lines = vec![sprintf(
        "%v %v",
        &[
            Value::ints(ages.to_vec()),
            Value::int(ages.len() as i64),
        ],
    )?];
    ages.set(1, 35)?; // writing past index 2 would end the run
    lines.push(sprintf("%v", &[Value::ints(ages.to_vec())])?);
    Ok(lines)
}

fn slices_update_append() -> Result<Vec<String>> {
    let scores = Slice::from_vec(vec![100_i64, 50, 60]);
    scores.set(2, 25)?;
    let mut lines = vec![sprintf("%v", &[ints(&scores)])?];
    let scores = scores.append(85);
    lines.push(sprintf(
        "%v %v",
        &[ints(&scores), Value::int(scores.len() as i64)],
    )?);
    Ok(lines)
}

fn slices_ranges() -> Result<Vec<String>> {
    let names = Slice::from_vec(vec!["yoshi", "mario", "peach", "bowser"]);
    let range_one = names.range(Some(1), Some(4))?;
    let range_two = names.range(Some(2), None)?;
    let range_three = names.range(None, Some(3))?;
    Ok(vec![
        sprintf("%v", &[strs(&range_one)])?,
        sprintf("%v", &[strs(&range_two)])?,
        sprintf("%v", &[strs(&range_three)])?,
    ])
}

fn slices_aliasing() -> Result<Vec<String>> {
    let names = Slice::from_vec(vec!["yoshi", "mario", "peach", "bowser"]);
    let head = names.range(None, Some(3))?;

    // `head` leaves one spare cell, so the append lands in the buffer it
    // shares with `names` and clobbers "bowser".
    let appended = head.append("koopa");
    let mut lines = vec![sprintf(
        "%v %v %v",
        &[
            strs(&appended),
            strs(&names),
            Value::bool(appended.shares_buffer(&names)),
        ],
    )?];

    // `names` is at capacity, so this append copies out instead.
    let detached = names.append("toad");
    lines.push(sprintf(
        "%v %v %v",
        &[
            strs(&detached),
            strs(&names),
            Value::bool(detached.shares_buffer(&names)),
        ],
    )?);
    Ok(lines)
}

fn strings_utilities() -> Result<Vec<String>> {
    let greeting = "hello there friends!";
    let index = greeting.find("ll").map(|idx| idx as i64).unwrap_or(-1);
    Ok(vec![
        sprintf("%v", &[Value::str(greeting.to_uppercase())])?,
        sprintf(
            "contains hello: %v",
            &[Value::bool(greeting.contains("hello"))],
        )?,
        sprintf("%v", &[Value::str(greeting.replace("hello", "howdy"))])?,
        sprintf("original is unchanged: %v", &[Value::str(greeting)])?,
        sprintf("index of ll: %v", &[Value::int(index)])?,
        sprintf("%v", &[Value::strs(greeting.split(' '))])?,
    ])
}

fn sorting_ints() -> Result<Vec<String>> {
    let ages = Slice::from_vec(vec![45_i64, 20, 35, 30, 75, 60, 50, 25]);
    ages.sort();
    Ok(vec![
        sprintf("%v", &[ints(&ages)])?,
        sprintf("30 is at index %v", &[Value::int(ages.search(&30) as i64)])?,
    ])
}

fn sorting_strings() -> Result<Vec<String>> {
    let names = Slice::from_vec(vec!["yoshi", "mario", "peach", "bowser", "luigi"]);
    names.sort();
    Ok(vec![
        sprintf("%v", &[strs(&names)])?,
        sprintf(
            "bowser is at index %v",
            &[Value::int(names.search(&"bowser") as i64)],
        )?,
    ])
}
