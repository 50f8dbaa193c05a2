use ohlcv_sheet::{load_sheet, start_session, ChartView, SymbolSelection};

fn main() {
    env_logger::init();

    let sheet_id = "1Q_En7VGGfifDmn5xuiF-t_02doPpwl4PLzxb4TBCW0Q";

    let table = load_sheet(sheet_id, 0).unwrap();
    let session = start_session(&table).unwrap();

    println!("Loaded {} rows with columns {:?}", table.len(), table.columns());

    match session.chart_view(&SymbolSelection::from_search("nabil")) {
        ChartView::Series(series) => {
            for (date, close) in series.points() {
                println!("{:?}: {:?}", date, close);
            }
        }
        other => println!("{:?}", other),
    }
}
