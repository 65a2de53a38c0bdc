use crate::error::RuntimeError;
use crate::list::List;
use crate::values::Value;

pub(crate) fn expect_list<'a>(value: &'a Value, ctx: &str) -> Result<&'a List, RuntimeError> {
    match value {
        Value::List(items) => Ok(items),
        other => Err(RuntimeError::type_mismatch(ctx, "List", other)),
    }
}

pub fn map<F>(mut func: F, xs: &List) -> Result<List, RuntimeError>
where
    F: FnMut(&Value) -> Result<Value, RuntimeError>,
{
    let out = xs.iter().map(&mut func).collect::<Result<Vec<_>, _>>()?;
    Ok(List::from_values(out))
}

pub fn reverse(xs: &List) -> List {
    xs.reverse()
}

/// Places `sep` between consecutive elements. `sep` must carry the same tag
/// as the elements.
pub fn intersperse(sep: &Value, xs: &List) -> Result<List, RuntimeError> {
    let Some((first, _)) = xs.uncons() else {
        return Ok(List::nil());
    };
    if first.type_name() != sep.type_name() {
        return Err(RuntimeError::type_mismatch(
            "intersperse",
            first.type_name(),
            sep,
        ));
    }
    let mut out = Vec::with_capacity(xs.len() * 2);
    for (idx, item) in xs.iter().enumerate() {
        if idx > 0 {
            out.push(sep.clone());
        }
        out.push(item.clone());
    }
    Ok(List::from_values(out))
}

/// Joins a list of lists with `sep` between each pair.
pub fn intercalate(sep: &List, xss: &List) -> Result<List, RuntimeError> {
    let mut out = Vec::new();
    for (idx, xs) in xss.iter().enumerate() {
        let xs = expect_list(xs, "intercalate")?;
        if idx > 0 {
            out.extend(sep.iter().cloned());
        }
        out.extend(xs.iter().cloned());
    }
    Ok(List::from_values(out))
}

/// Flattens a list of lists. The last inner list is shared, not copied.
pub fn concat(xss: &List) -> Result<List, RuntimeError> {
    let rows = xss
        .iter()
        .map(|xs| expect_list(xs, "concat"))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows
        .into_iter()
        .rev()
        .fold(List::nil(), |acc, row| row.append(&acc)))
}

/// Rows become columns. Shorter rows are skipped once exhausted, so
/// `transpose [[10,11],[20],[],[30,31,32]] == [[10,20,30],[11,31],[32]]`.
pub fn transpose(xss: &List) -> Result<List, RuntimeError> {
    let mut rows = xss
        .iter()
        .map(|xs| expect_list(xs, "transpose"))
        .collect::<Result<Vec<_>, _>>()?;
    let mut columns = Vec::new();
    loop {
        let mut column = Vec::new();
        let mut next_rows = Vec::with_capacity(rows.len());
        for row in rows {
            if let Some((head, tail)) = row.uncons() {
                column.push(head.clone());
                next_rows.push(tail);
            }
        }
        if column.is_empty() {
            break;
        }
        columns.push(Value::List(List::from_values(column)));
        rows = next_rows;
    }
    Ok(List::from_values(columns))
}

/// Applicative `<*>` for lists: every function applied to every value,
/// functions in the outer loop.
pub fn ap<F>(mut apply: F, funcs: &List, xs: &List) -> Result<List, RuntimeError>
where
    F: FnMut(&Value, &Value) -> Result<Value, RuntimeError>,
{
    let mut out = Vec::with_capacity(funcs.len() * xs.len());
    for func in funcs.iter() {
        for x in xs.iter() {
            out.push(apply(func, x)?);
        }
    }
    Ok(List::from_values(out))
}
