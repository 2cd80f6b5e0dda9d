use std::fmt::{Display, Write};

use crate::node::Node;

/// Render the subtree rooted at `n` as a Graphviz `dot` digraph.
pub(crate) fn print_dot<R>(n: Option<&Node<R>>) -> String
where
    R: Display,
{
    let mut buf = String::new();

    // Writing to a String is infallible.
    let _ = write_dot(n, &mut buf);

    buf
}

fn write_dot<R, W>(n: Option<&Node<R>>, buf: &mut W) -> std::fmt::Result
where
    W: Write,
    R: Display,
{
    writeln!(buf, "digraph {{")?;
    writeln!(buf, r#"bgcolor = "transparent";"#)?;
    writeln!(
        buf,
        r#"node [shape = record; style = filled; fontcolor = orange4; fillcolor = white;];"#
    )?;
    if let Some(n) = n {
        recurse(n, &mut 0, buf)?;
    }
    writeln!(buf, "}}")
}

/// Write the subtree rooted at `n`, numbering nodes in pre-order from `next`.
///
/// Node IDs are the pre-order index, as the tree may hold duplicate intervals.
fn recurse<R, W>(n: &Node<R>, next: &mut usize, buf: &mut W) -> std::fmt::Result
where
    W: Write,
    R: Display,
{
    let id = *next;
    *next += 1;

    writeln!(
        buf,
        r#""n{}" [label="{} | {{ max={} | h={} }}"];"#,
        id,
        n.interval(),
        n.subtree_max(),
        n.height(),
    )?;

    for (side, v) in [("l", n.left()), ("r", n.right())] {
        match v {
            Some(v) => {
                writeln!(buf, "\"n{}\" -> \"n{}\" [color = \"orange1\";];", id, *next)?;
                recurse(v, next, buf)?;
            }
            None => {
                writeln!(buf, "\"null_n{id}_{side}\" [shape=point,style=invis];")?;
                writeln!(buf, "\"n{id}\" -> \"null_n{id}_{side}\" [style=invis];")?;
            }
        };
    }

    Ok(())
}
