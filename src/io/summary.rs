use crate::ctx::Ctx;
use crate::io::json_writer::{TOOL_NAME, build_summary};

pub fn format_summary(ctx: &Ctx) -> String {
    let summary = build_summary(ctx);

    let mut out = String::new();
    out.push_str(&format!("{} v{}\n", TOOL_NAME, summary.tool.version));
    out.push_str(&format!("Groups: {}\n", summary.groups.join(", ")));
    out.push_str(&format!(
        "Subjects: {}, time-series rows: {}\n",
        summary.subjects, summary.timeseries_rows
    ));
    for (genotype, count) in &summary.genotypes {
        out.push_str(&format!("  {}\t{}\n", genotype, count));
    }
    if !ctx.written.is_empty() {
        out.push_str("Wrote:\n");
        for path in &ctx.written {
            out.push_str(&format!("  {}\n", path.display()));
        }
    }
    out
}
