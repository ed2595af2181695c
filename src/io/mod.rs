use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};

use crate::{
    error::{Error, Result},
    report::{Layout, Report},
    space::{render, BitOrder},
    types::{Cnf, Lit},
};

const RULE_WIDTH: usize = 185;

fn parse_header(line: &str) -> Result<(usize, usize)> {
    let malformed = || Error::MalformedHeader(line.to_string());

    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        ["p", "cnf", vars, clauses] => Ok((
            vars.parse().map_err(|_| malformed())?,
            clauses.parse().map_err(|_| malformed())?,
        )),
        _ => Err(malformed()),
    }
}

pub fn read_problem(reader: &mut impl Read) -> Result<Cnf> {
    let mut lines = BufReader::new(reader).lines();

    let (var_count, clause_count) = loop {
        let line = lines.next().ok_or(Error::MissingHeader)??;

        if line.starts_with('c') || line.trim().is_empty() {
            // comment line
            continue;
        }

        break parse_header(&line)?;
    };

    let mut clauses = vec![];
    let mut clause = vec![];

    for line in lines {
        let line = line?;
        // SATLIB benchmark files end with a `%` line
        if line.starts_with('%') {
            break;
        }
        if line.starts_with('c') {
            continue;
        }

        for word in line.split_whitespace() {
            let lit = word
                .parse::<Lit>()
                .map_err(|_| Error::InvalidLiteral(word.to_string()))?;
            match lit {
                0 => {
                    clauses.push(clause.clone());
                    clause.clear();
                }
                _ => {
                    let var = lit.unsigned_abs() as usize;
                    if var > var_count {
                        return Err(Error::VariableOutOfRange { var, var_count });
                    }
                    clause.push(lit);
                }
            }
        }
    }

    if !clause.is_empty() {
        return Err(Error::UnterminatedClause { len: clause.len() });
    }

    if clause_count != clauses.len() {
        return Err(Error::ClauseCountMismatch {
            expected: clause_count,
            actual: clauses.len(),
        });
    }

    Cnf::new(clauses)
}

pub fn write_report(writer: &mut impl Write, report: &Report) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);

    writeln!(writer, "EXAMPLE {}", report.name)?;
    writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(
        writer,
        "SAT SPACE       : {}",
        render(&report.sat_space, BitOrder::Inverse)
    )?;
    writeln!(writer, "UNIVERSAL       : {}", report.search.witness())?;
    writeln!(
        writer,
        "UNIVERSAL SPACE : {}",
        render(&report.universal_space, BitOrder::Direct)
    )?;
    writeln!(
        writer,
        "2^(n + m)       : 2^({} + {})",
        report.var_count, report.clause_count
    )?;
    writeln!(writer, "ABS COMPLEXITY  : {}", report.search.complexity)?;
    if report.layout == Layout::Standard {
        let found = if report.search.is_found() { "yes" } else { "no" };
        writeln!(writer, "FOUND           : {found}")?;
    }
    writeln!(writer, "{}", "-".repeat(RULE_WIDTH))?;

    writer.flush()
}
