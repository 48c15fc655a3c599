// Plotly figure builders
use crate::domain::choropleth::{ChoroplethRow, EnergyType, RegionalCountry, RegionalRows};
use crate::domain::cloud::CloudComparison;
use crate::domain::emission::EmissionRecord;
use serde_json::{json, Value};

pub type Figure = Value;

/// Greens, then greys, then oranges
const COLORSCALE: [&str; 14] = [
    "rgb(0, 68, 27)",
    "rgb(0, 109, 44)",
    "rgb(35, 139, 69)",
    "rgb(65, 171, 93)",
    "rgb(116, 196, 118)",
    "rgb(161, 217, 155)",
    "rgb(199, 233, 192)",
    "rgb(229, 245, 224)",
    "rgb(240, 240, 240)",
    "rgb(217, 217, 217)",
    "rgb(189, 189, 189)",
    "rgb(253, 208, 162)",
    "rgb(253, 174, 107)",
    "rgb(253, 141, 60)",
];

const EMISSIONS_LABEL: &str = "Carbon Equivalent (kg)";
const WHITE: &str = "rgb(255,255,255)";
const GREEN: &str = "green";
const MAP_WIDTH: u32 = 1400;
const MAP_HEIGHT: u32 = 600;

fn colorscale(reversed: bool) -> Value {
    let last = (COLORSCALE.len() - 1) as f64;
    let mut colors: Vec<&str> = COLORSCALE.to_vec();
    if reversed {
        colors.reverse();
    }
    Value::Array(
        colors
            .into_iter()
            .enumerate()
            .map(|(i, color)| json!([i as f64 / last, color]))
            .collect(),
    )
}

fn mix_customdata(rows: &[ChoroplethRow]) -> Vec<Value> {
    rows.iter()
        .map(|r| match r.mix {
            Some(mix) => json!([r.name, mix.coal, mix.petroleum, mix.natural_gas, mix.low_carbon]),
            None => json!([r.name]),
        })
        .collect()
}

fn map_layout(geo: Value) -> Value {
    json!({
        "width": MAP_WIDTH,
        "height": MAP_HEIGHT,
        "margin": {"l": 0, "r": 0, "t": 20, "b": 0},
        "geo": geo,
    })
}

pub fn global_emissions_choropleth(rows: &[ChoroplethRow]) -> Figure {
    let trace = json!({
        "type": "choropleth",
        "locations": rows.iter().map(|r| &r.code).collect::<Vec<_>>(),
        "z": rows.iter().map(|r| r.emissions).collect::<Vec<_>>(),
        "customdata": mix_customdata(rows),
        "colorscale": colorscale(false),
        "colorbar": {"title": {"text": EMISSIONS_LABEL}},
        "hovertemplate": concat!(
            "Country: %{customdata[0]}<br>",
            "Country Code: %{location}<br>",
            "Carbon Equivalent (kg): %{z}<br>",
            "Coal Energy (%): %{customdata[1]}<br>",
            "Petroleum Energy (%): %{customdata[2]}<br>",
            "Natural Gas Energy (%): %{customdata[3]}<br>",
            "Low Carbon Energy (%): %{customdata[4]}<extra></extra>"
        ),
    });
    json!({"data": [trace], "layout": map_layout(json!({"showframe": false}))})
}

pub fn global_energy_mix_choropleth(energy_type: EnergyType, rows: &[ChoroplethRow]) -> Figure {
    let label = energy_type.axis_label();
    let trace = json!({
        "type": "choropleth",
        "locations": rows.iter().map(|r| &r.code).collect::<Vec<_>>(),
        "z": rows
            .iter()
            .map(|r| r.mix.map(|m| m.share(energy_type)).unwrap_or_default())
            .collect::<Vec<_>>(),
        "customdata": rows.iter().map(|r| json!([r.name, r.emissions])).collect::<Vec<_>>(),
        // A high low-carbon share is the good end of the scale
        "colorscale": colorscale(energy_type == EnergyType::LowCarbon),
        "colorbar": {"title": {"text": label}},
        "hovertemplate": format!(
            "Country: %{{customdata[0]}}<br>{}: %{{customdata[1]}}<br>{}: %{{z}}<extra></extra>",
            EMISSIONS_LABEL, label
        ),
    });
    json!({"data": [trace], "layout": map_layout(json!({"showframe": false}))})
}

pub fn regional_emissions_choropleth(regional: &RegionalRows, canada_geojson: &Value) -> Figure {
    let rows = &regional.rows;
    let mut trace = json!({
        "type": "choropleth",
        "z": rows.iter().map(|r| r.emissions).collect::<Vec<_>>(),
        "customdata": rows.iter().map(|r| json!([r.name, r.code])).collect::<Vec<_>>(),
        "colorscale": colorscale(false),
        "colorbar": {"title": {"text": EMISSIONS_LABEL}},
        "hovertemplate": concat!(
            "Region: %{customdata[0]}<br>",
            "Carbon Equivalent (kg): %{z}<br>",
            "Region Code: %{customdata[1]}<extra></extra>"
        ),
    });

    let geo = match regional.country {
        RegionalCountry::Usa => {
            trace["locationmode"] = json!("USA-states");
            trace["locations"] = json!(rows.iter().map(|r| &r.code).collect::<Vec<_>>());
            json!({"scope": "usa"})
        }
        RegionalCountry::Canada => {
            trace["geojson"] = canada_geojson.clone();
            trace["featureidkey"] = json!("properties.cartodb_id");
            trace["locations"] = json!(rows.iter().map(|r| r.feature_id).collect::<Vec<_>>());
            json!({"scope": "north america", "fitbounds": "locations", "visible": true})
        }
    };

    json!({"data": [trace], "layout": map_layout(geo)})
}

pub fn cloud_emissions_barchart(comparison: &CloudComparison) -> Figure {
    let rows: Vec<_> = comparison.rows().collect();
    let emissions: Vec<f64> = rows.iter().map(|r| r.emissions).collect();
    let trace = json!({
        "type": "bar",
        "x": rows.iter().map(|r| &r.region).collect::<Vec<_>>(),
        "y": emissions,
        "customdata": rows.iter().map(|r| &r.country_name).collect::<Vec<_>>(),
        "marker": {
            "color": emissions,
            "colorscale": colorscale(false),
            "colorbar": {"title": {"text": EMISSIONS_LABEL}},
        },
        "hovertemplate": concat!(
            "Region: %{x}<br>",
            "Country: %{customdata}<br>",
            "Carbon Equivalent (kg): %{y}<extra></extra>"
        ),
    });
    json!({
        "data": [trace],
        "layout": {
            "width": MAP_WIDTH,
            "height": 500,
            "plot_bgcolor": WHITE,
            "xaxis": {"title": {"text": "Region"}, "tickangle": 45},
            "yaxis": {"title": {"text": EMISSIONS_LABEL}},
        },
    })
}

pub fn experiment_time_series(records: &[EmissionRecord]) -> Figure {
    let trace = json!({
        "type": "scatter",
        "mode": "lines",
        "x": records.iter().map(|r| &r.timestamp).collect::<Vec<_>>(),
        "y": records.iter().map(|r| r.emissions).collect::<Vec<_>>(),
        "line": {"color": GREEN},
        "hovertemplate": "Carbon Equivalent (kg): %{y}<extra></extra>",
    });
    json!({
        "data": [trace],
        "layout": {
            "plot_bgcolor": WHITE,
            "xaxis": {"title": {"text": "Timestamp"}},
            "yaxis": {"title": {"text": EMISSIONS_LABEL}},
        },
    })
}

/// Hover text listing every field of a record; absent values render empty.
fn record_hover(record: &EmissionRecord) -> String {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    [
        ("Timestamp", record.timestamp.clone()),
        ("Experiment Name", text(&record.experiment_id)),
        ("Run", text(&record.run_id)),
        ("Duration", record.duration.to_string()),
        ("Energy Consumed (kWh)", record.energy_consumed.to_string()),
        (EMISSIONS_LABEL, record.emissions.to_string()),
        ("Country Name", text(&record.country_name)),
        ("Country ISO Code", text(&record.country_iso_code)),
        ("Region", text(&record.region)),
        ("Cloud Provider", text(&record.cloud_provider)),
        ("Cloud Region", text(&record.cloud_region)),
    ]
    .iter()
    .map(|(label, value)| format!("{}: {}", label, value))
    .collect::<Vec<_>>()
    .join("<br>")
}

pub fn experiment_emissions_bar_chart(records: &[EmissionRecord]) -> Figure {
    let trace = json!({
        "type": "bar",
        "x": (0..records.len()).collect::<Vec<_>>(),
        "y": records.iter().map(|r| r.emissions).collect::<Vec<_>>(),
        "text": records.iter().map(record_hover).collect::<Vec<_>>(),
        "textposition": "none",
        "hovertemplate": "%{text}<extra></extra>",
        "marker": {"color": GREEN},
    });
    json!({
        "data": [trace],
        "layout": {
            "plot_bgcolor": WHITE,
            "yaxis": {"title": {"text": EMISSIONS_LABEL}},
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::choropleth::{global_rows, regional_rows};
    use crate::domain::cloud::CloudRegionRow;
    use crate::domain::emission::record;
    use crate::infrastructure::reference_data::embedded;

    #[test]
    fn test_colorscale_bounds() {
        let scale = colorscale(false);
        assert_eq!(scale[0], json!([0.0, "rgb(0, 68, 27)"]));
        assert_eq!(scale[13], json!([1.0, "rgb(253, 141, 60)"]));

        let reversed = colorscale(true);
        assert_eq!(reversed[0][1], "rgb(253, 141, 60)");
    }

    #[test]
    fn test_global_figures() {
        let reference = embedded().unwrap();
        let rows = global_rows(3.0, &reference);

        let emissions = global_emissions_choropleth(&rows);
        let trace = &emissions["data"][0];
        assert_eq!(trace["locations"].as_array().unwrap().len(), rows.len());
        assert_eq!(trace["z"][0], json!(rows[0].emissions));

        let mix = global_energy_mix_choropleth(EnergyType::LowCarbon, &rows);
        let trace = &mix["data"][0];
        assert_eq!(trace["z"][0], json!(rows[0].mix.unwrap().low_carbon));
        assert_eq!(trace["colorscale"][0][1], "rgb(253, 141, 60)");
        assert_eq!(trace["colorbar"]["title"]["text"], "Low Carbon Energy (%)");
    }

    #[test]
    fn test_regional_figures() {
        let reference = embedded().unwrap();

        let usa = regional_rows(1.0, "USA", &reference).unwrap();
        let figure = regional_emissions_choropleth(&usa, &reference.canada_geojson);
        assert_eq!(figure["data"][0]["locationmode"], "USA-states");
        assert_eq!(figure["layout"]["geo"]["scope"], "usa");
        assert!(figure["data"][0].get("geojson").is_none());

        let canada = regional_rows(1.0, "CAN", &reference).unwrap();
        let figure = regional_emissions_choropleth(&canada, &reference.canada_geojson);
        assert_eq!(figure["data"][0]["featureidkey"], "properties.cartodb_id");
        assert_eq!(figure["data"][0]["geojson"], reference.canada_geojson);
        assert_eq!(figure["layout"]["geo"]["fitbounds"], "locations");
    }

    #[test]
    fn test_cloud_barchart_puts_current_region_first() {
        let row = |region: &str, emissions: f64| CloudRegionRow {
            provider: "aws".to_string(),
            region: region.to_string(),
            country_name: "Somewhere".to_string(),
            emissions,
        };
        let comparison = CloudComparison {
            provider_name: "Amazon Web Services".to_string(),
            current: row("us-east-2", 5.0),
            alternatives: vec![row("eu-north-1", 0.1), row("us-west-2", 1.4)],
        };
        let figure = cloud_emissions_barchart(&comparison);
        assert_eq!(figure["data"][0]["x"], json!(["us-east-2", "eu-north-1", "us-west-2"]));
    }

    #[test]
    fn test_experiment_charts() {
        let records = vec![
            record("2021-04-04T08:00:00", 1.0, 0.5),
            record("2021-04-04T09:00:00", 2.0, 1.0),
        ];

        let series = experiment_time_series(&records);
        assert_eq!(series["data"][0]["y"], json!([0.5, 1.0]));
        assert_eq!(series["data"][0]["line"]["color"], "green");

        let bars = experiment_emissions_bar_chart(&records);
        let hover = bars["data"][0]["text"][1].as_str().unwrap();
        assert!(hover.contains("Energy Consumed (kWh): 2"));
        assert!(hover.contains("Cloud Provider: <br>"));
    }
}
