use crate::dejsonify;
use anyhow::{anyhow, Context, Result};
use knapsack_core::{Instance, Item, Solution, SolverConfig};
use std::{fs, io::Read, path::Path};

const ITEM_DELIMITERS: &[char] = &[' ', ',', '\t', '\r', '\n'];

/// Resolves `-` to stdin and an existing path to its contents; anything else is
/// taken as inline content.
pub fn read_source(src: &str) -> Result<String> {
    if src == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else if Path::new(src).is_file() {
        fs::read_to_string(src).with_context(|| format!("Failed to read file: {}", src))
    } else {
        Ok(src.to_string())
    }
}

/// A decimal integer in `[0, i32::MAX]` followed only by whitespace.
pub fn parse_capacity(line: &str) -> Result<i32> {
    let digits = line.trim();
    let capacity = digits
        .parse::<i64>()
        .ok()
        .filter(|c| (0..=i32::MAX as i64).contains(c))
        .ok_or_else(|| anyhow!("Failed to parse capacity: '{}'", digits))?;
    Ok(capacity as i32)
}

fn parse_item_token(token: &str) -> Option<Item> {
    let (weight, value) = token.split_once(':')?;
    let weight = weight.parse::<i64>().ok()?;
    if !(0..=i32::MAX as i64).contains(&weight) {
        return None;
    }
    let value = i32::try_from(value.parse::<i64>().ok()?).ok()?;
    Some(Item::new(weight as i32, value))
}

/// `weight:value` tokens separated by spaces, tabs or commas. At least one is required.
pub fn parse_items(line: &str) -> Result<Vec<Item>> {
    let items = line
        .split(ITEM_DELIMITERS)
        .filter(|token| !token.is_empty())
        .map(|token| {
            parse_item_token(token)
                .ok_or_else(|| anyhow!("Failed to parse items: invalid token '{}'", token))
        })
        .collect::<Result<Vec<_>>>()?;
    if items.is_empty() {
        return Err(anyhow!("Failed to parse items: no items given"));
    }
    Ok(items)
}

/// Line-oriented format: capacity on the first line, items on the second.
pub fn parse_text_instance(text: &str) -> Result<Instance> {
    let mut lines = text.lines();
    let capacity = parse_capacity(
        lines
            .next()
            .ok_or_else(|| anyhow!("Failed to parse capacity: input is empty"))?,
    )?;
    let items = parse_items(
        lines
            .next()
            .ok_or_else(|| anyhow!("Failed to parse items: missing item line"))?,
    )?;
    Ok(Instance::new(capacity, items))
}

/// Accepts either a JSON instance object or the line-oriented text format.
pub fn parse_instance(text: &str) -> Result<Instance> {
    if text.trim_start().starts_with('{') {
        dejsonify::<Instance>(text).map_err(|e| anyhow!("Failed to parse instance json: {}", e))
    } else {
        parse_text_instance(text)
    }
}

pub fn load_instance(src: &str) -> Result<Instance> {
    parse_instance(&read_source(src)?)
}

/// Config json string or path to a json file.
pub fn load_config(src: &str) -> Result<SolverConfig> {
    let config = if src.ends_with(".json") {
        fs::read_to_string(src).with_context(|| format!("Failed to read config file: {}", src))?
    } else {
        src.to_string()
    };
    dejsonify::<SolverConfig>(&config).map_err(|e| anyhow!("Failed to parse config: {}", e))
}

pub fn load_solution(src: &str) -> Result<Solution> {
    let solution = read_source(src)?;
    dejsonify::<Solution>(&solution).map_err(|e| anyhow!("Failed to parse solution: {}", e))
}
