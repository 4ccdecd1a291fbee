use colored::Colorize;
use cowabunga::{
    all, any, count, drop, drop_leading_while, drop_while, each_cons, each_slice, each_with,
    filter, filter_map, find, first, flat_map, group_by, is_member, last, map, take, SeqError,
};

fn section(title: &str) {
    println!("\n{}", format!("== {} ==", title).bold());
}

fn report<T: std::fmt::Debug>(label: &str, result: Result<T, SeqError>) {
    match result {
        Ok(value) => println!("{} {:?}", label, value),
        Err(err) => println!("{} {}", label, err.to_string().red()),
    }
}

fn main() -> Result<(), SeqError> {
    let strs = ["foo", "bar", "baz"];
    let ints = [1, 2, 3];

    section("Predicate queries");
    println!("all len == 3:     {}", all(&strs, |s| s.len() == 3));
    println!("all starts f:     {}", all(&strs, |s| s.starts_with('f')));
    println!("any n > 2:        {}", any(&ints, |&n| n > 2));
    println!("count n > 1:      {}", count(&ints, |&n| n > 1));
    println!("is_member 2:      {}", is_member(&ints, &2));
    println!("find n > 1:       {:?}", find(&ints, |&n| n > 1));

    section("Transformation");
    println!("map upper:        {:?}", map(&strs, |s| s.to_uppercase()));
    println!("map n + 1:        {:?}", map(&ints, |n| (n + 1).to_string()));
    println!("filter starts b:  {:?}", filter(&strs, |s| s.starts_with('b')));
    println!(
        "filter_map:       {:?}",
        filter_map(&ints, |&n| if n > 1 { Some(n * 10) } else { None })
    );
    println!("flat_map:         {:?}", flat_map(&ints, |&n| vec![n; n as usize]));
    let mut groups: Vec<_> = group_by(&strs, |s| s.chars().next()).into_iter().collect();
    groups.sort();
    println!("group_by first:   {:?}", groups);

    section("Positional / windowing");
    println!("first:            {:?}", first(&ints));
    println!("last of empty:    {:?}", last::<i32>(&[]));
    report("take 2:          ", take(&ints, 2));
    report("drop 1:          ", drop(&ints, 1));
    report("take 5:          ", take(&ints, 5));
    println!("drop_while n < 3: {:?}", drop_while(&[1, 5, 2], |&n| n < 3));
    println!("leading n < 3:    {:?}", drop_leading_while(&[1, 5, 2], |&n| n < 3));

    each_slice(&ints, 2, |chunk| println!("slice:            {:?}", chunk))?;
    each_cons(&ints, 2, |window| println!("cons:             {:?}", window))?;
    report("slice size 0:    ", each_slice(&ints, 0, |_| {}));

    section("Accumulation");
    let mut total = 0;
    each_with(&ints, &mut total, |n, acc| *acc += n);
    println!("each_with sum:    {}", total);

    println!("\n{}", "done".green());
    Ok(())
}
